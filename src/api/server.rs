use crate::api::config::{Config, ConfigError};
use crate::api::graphql::schema::{StoreSchema, build_schema};
use crate::api::routes::media_routes;
use crate::services::media_service::MediaService;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::Router;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to bind to {0}: {1}")]
    Bind(String, std::io::Error),
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// All routes of the store API. Uploaded files are reachable under `/public`
/// as long as `media_dir` lives inside `public_dir`.
pub fn app(schema: StoreSchema, media: MediaService, config: &Config) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api", get(|| async { "Fooz Store API is running!" }))
        .route("/graphql", get(graphiql).post_service(GraphQL::new(schema)))
        .nest("/media", media_routes::routes(media))
        .nest_service("/public", ServeDir::new(&config.public_dir))
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
}

pub async fn start() -> Result<(), ServerError> {
    let config = Config::get()?;

    let media = MediaService::new(&config.media_dir, &config.media_base_url);
    let router = app(build_schema(), media, config);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| ServerError::Bind(address.clone(), e))?;

    tracing::info!("Server running on http://{}", address);
    tracing::info!("GraphiQL available at http://{}/graphql", address);

    axum::serve(listener, router).await?;

    Ok(())
}
