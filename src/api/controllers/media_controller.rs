use crate::api::request::{DeleteMediaParams, MediaQueryParams};
use crate::api::response::{MediaType, SuccessResponse};
use crate::services::errors::MediaServiceError;
use crate::services::media_service::MediaService;
use axum::Json;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

fn error_response(error: MediaServiceError) -> Response {
    match error {
        MediaServiceError::NoFileUploaded | MediaServiceError::InvalidId(_) => {
            (StatusCode::BAD_REQUEST, error.to_string()).into_response()
        }
        MediaServiceError::NotFound(_) => (StatusCode::NOT_FOUND, error.to_string()).into_response(),
        MediaServiceError::Storage(reason) => {
            tracing::error!("Media storage failure: {}", reason);
            (StatusCode::INTERNAL_SERVER_ERROR, "Media storage error").into_response()
        }
    }
}

/// Upload one file from the multipart field `file`
pub async fn upload_file(State(service): State<MediaService>, mut multipart: Multipart) -> Response {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return (StatusCode::BAD_REQUEST, e.body_text()).into_response(),
        };

        if field.name() != Some("file") {
            continue;
        }

        let name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let bytes = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => return (StatusCode::BAD_REQUEST, e.body_text()).into_response(),
        };

        return match service.save_file(&name, &content_type, &bytes).await {
            Ok(file) => (StatusCode::CREATED, Json(file)).into_response(),
            Err(e) => error_response(e),
        };
    }

    error_response(MediaServiceError::NoFileUploaded)
}

/// List stored files, newest first
pub async fn list_files(
    State(service): State<MediaService>,
    Query(params): Query<MediaQueryParams>,
) -> Response {
    let media_type = match params.media_type.as_deref().map(str::to_uppercase).as_deref() {
        None | Some("") => None,
        Some("IMAGE") => Some(MediaType::Image),
        Some("GLB") => Some(MediaType::Glb),
        Some(other) => {
            return (
                StatusCode::BAD_REQUEST,
                format!("Unknown media type: {}", other),
            )
                .into_response();
        }
    };

    match service
        .list_files(media_type, params.page, params.limit)
        .await
    {
        Ok(list) => (StatusCode::OK, Json(list)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_file(State(service): State<MediaService>, Path(id): Path<String>) -> Response {
    match service.delete_file(&id).await {
        Ok(()) => (StatusCode::OK, Json(SuccessResponse { success: true })).into_response(),
        Err(e) => error_response(e),
    }
}

/// Delete a comma separated list of files given as `?ids=`
pub async fn delete_multiple(
    State(service): State<MediaService>,
    Query(params): Query<DeleteMediaParams>,
) -> Response {
    let ids: Vec<&str> = params
        .ids
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .collect();

    match service.delete_files(&ids).await {
        Ok(_) => (StatusCode::OK, Json(SuccessResponse { success: true })).into_response(),
        Err(e) => error_response(e),
    }
}
