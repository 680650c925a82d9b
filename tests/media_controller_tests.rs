use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use fooz_server_lib::api::response::{MediaFileResponse, MediaListResponse, MediaType};
use fooz_server_lib::api::routes::media_routes;
use fooz_server_lib::services::media_service::MediaService;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

const BOUNDARY: &str = "X-FOOZ-BOUNDARY";

fn setup() -> (TempDir, Router) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let service = MediaService::new(dir.path(), "/public/uploads");
    let app = Router::new().nest("/media", media_routes::routes(service));

    (dir, app)
}

fn multipart_body(field: &str, file_name: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn upload_request(field: &str, file_name: &str, content_type: &str, data: &[u8]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/media/upload")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(multipart_body(field, file_name, content_type, data)))
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn upload(app: &Router, file_name: &str, content_type: &str, data: &[u8]) -> MediaFileResponse {
    let response = app
        .clone()
        .oneshot(upload_request("file", file_name, content_type, data))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

#[tokio::test]
async fn test_upload_image() {
    let (dir, app) = setup();

    let file = upload(&app, "Living Room.PNG", "image/png", b"fake-png").await;

    assert_eq!(file.media_type, MediaType::Image);
    assert_eq!(file.name, "Living Room.PNG");
    assert_eq!(file.size, 8);
    assert!(file.id.ends_with(".png"), "unexpected id {}", file.id);
    assert_eq!(file.url, format!("/public/uploads/{}", file.id));
    assert!(dir.path().join(&file.id).exists());
}

#[tokio::test]
async fn test_upload_model_is_glb() {
    let (_dir, app) = setup();

    let file = upload(&app, "desk.glb", "model/gltf-binary", b"glTF").await;

    assert_eq!(file.media_type, MediaType::Glb);
    assert!(file.id.ends_with(".glb"));
}

#[tokio::test]
async fn test_upload_response_uses_type_key() {
    let (_dir, app) = setup();

    let response = app
        .clone()
        .oneshot(upload_request("file", "a.jpg", "image/jpeg", b"jpg"))
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();

    assert_eq!(json["type"], "IMAGE");
    assert!(json["createdAt"].is_string());
}

#[tokio::test]
async fn test_upload_without_file_field() {
    let (_dir, app) = setup();

    let response = app
        .oneshot(upload_request("avatar", "a.png", "image/png", b"png"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_bytes(response).await, b"No file uploaded");
}

#[tokio::test]
async fn test_list_files_filters_and_paginates() {
    let (_dir, app) = setup();

    upload(&app, "one.png", "image/png", b"1").await;
    upload(&app, "two.jpg", "image/jpeg", b"22").await;
    upload(&app, "model.glb", "model/gltf-binary", b"333").await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/media?type=IMAGE&page=1&limit=1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let list: MediaListResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();

    assert_eq!(list.total, 2);
    assert_eq!(list.page, 1);
    assert_eq!(list.limit, 1);
    assert_eq!(list.items.len(), 1);
    assert_eq!(list.items[0].media_type, MediaType::Image);

    let response = app
        .oneshot(Request::builder().uri("/media").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let list: MediaListResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();

    assert_eq!(list.total, 3);
    assert_eq!(list.page, 1);
    assert_eq!(list.limit, 20);
}

#[tokio::test]
async fn test_delete_file() {
    let (dir, app) = setup();
    let file = upload(&app, "one.png", "image/png", b"1").await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/media/{}", file.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json["success"], true);
    assert!(!dir.path().join(&file.id).exists());

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/media/{}", file.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_rejects_path_traversal() {
    let (dir, app) = setup();

    let keep_name = format!("{}-keep.txt", dir.path().file_name().unwrap().to_string_lossy());
    let outside = dir.path().parent().unwrap().join(&keep_name);
    std::fs::write(&outside, b"keep").unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/media/..%2F{}", keep_name))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(outside.exists());
    std::fs::remove_file(outside).unwrap();
}

#[tokio::test]
async fn test_delete_multiple() {
    let (dir, app) = setup();
    let a = upload(&app, "a.png", "image/png", b"a").await;
    let b = upload(&app, "b.png", "image/png", b"b").await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/media/delete-multiple?ids={},{}", a.id, b.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(!dir.path().join(&a.id).exists());
    assert!(!dir.path().join(&b.id).exists());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/media/delete-multiple?ids={},../escape", a.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_before_first_upload_is_empty() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let service = MediaService::new(dir.path().join("uploads"), "/public/uploads");
    let app = Router::new().nest("/media", media_routes::routes(service));

    let response = app
        .oneshot(Request::builder().uri("/media").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let list: MediaListResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();

    assert_eq!(list.total, 0);
    assert!(list.items.is_empty());
    assert_eq!(list.page, 1);
    assert_eq!(list.limit, 20);
}
