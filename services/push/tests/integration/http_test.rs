use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use sea_orm::DatabaseConnection;
use serde_json::json;

use navette_push::infra::expo::ExpoPushClient;
use navette_push::router::build_router;
use navette_push::state::AppState;

fn server() -> TestServer {
    // Validation paths below never reach the store or the push API.
    let state = AppState {
        db: DatabaseConnection::default(),
        push: ExpoPushClient::new("http://localhost:9/push".to_owned(), None),
    };
    TestServer::new(build_router(state)).unwrap()
}

fn bearer() -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("authorization"),
        HeaderValue::from_static("Bearer internal-service-token"),
    )
}

#[tokio::test]
async fn should_reject_request_without_bearer_token() {
    let server = server();
    let response = server
        .post("/push/dispatch")
        .json(&json!({ "category": "courses", "title": "t", "message": "m" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_reject_missing_category_with_400() {
    let server = server();
    let (name, value) = bearer();
    let response = server
        .post("/push/dispatch")
        .add_header(name, value)
        .json(&json!({ "title": "t", "message": "m" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "MISSING_DATA");
}

#[tokio::test]
async fn should_reject_missing_title_with_400() {
    let server = server();
    let (name, value) = bearer();
    let response = server
        .post("/push/dispatch")
        .add_header(name, value)
        .json(&json!({ "category": "courses", "message": "m" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_reject_unknown_category_with_400() {
    let server = server();
    let (name, value) = bearer();
    let response = server
        .post("/push/dispatch")
        .add_header(name, value)
        .json(&json!({ "category": "news", "title": "t", "message": "m" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "INVALID_CATEGORY");
}

#[tokio::test]
async fn should_reject_unknown_recipient_role_with_400() {
    let server = server();
    let (name, value) = bearer();
    let response = server
        .post("/push/dispatch")
        .add_header(name, value)
        .json(&json!({
            "category": "courses",
            "title": "t",
            "message": "m",
            "recipientRole": "dispatcher"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "INVALID_ROLE");
}

#[tokio::test]
async fn should_return_405_for_non_post_methods() {
    let server = server();
    let response = server.get("/push/dispatch").await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn should_keep_health_endpoints_open() {
    let server = server();
    assert_eq!(server.get("/healthz").await.status_code(), StatusCode::OK);
    assert_eq!(server.get("/readyz").await.status_code(), StatusCode::OK);
}
