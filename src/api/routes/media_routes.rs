use crate::api::controllers::media_controller;
use crate::services::media_service::MediaService;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};

/// GLB models easily exceed axum's 2 MB default body limit.
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

pub fn routes(service: MediaService) -> Router {
    Router::new()
        .route("/", get(media_controller::list_files))
        .route(
            "/upload",
            post(media_controller::upload_file).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/delete-multiple", post(media_controller::delete_multiple))
        .route("/{id}", delete(media_controller::delete_file))
        .with_state(service)
}
