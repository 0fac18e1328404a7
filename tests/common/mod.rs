// Common test utilities shared across test files

use axum::{body::Body, http::Request, Router};
use promptvault::config::Settings;
use tower::ServiceExt; // for `oneshot`

/// Router backed by a fresh in-memory database with the default seed
#[allow(dead_code)]
pub async fn create_test_app() -> Router {
    promptvault::create_router(&Settings::in_memory())
        .await
        .expect("Failed to build test app")
}

/// Send one request and return (status, body)
#[allow(dead_code)]
pub async fn send(app: &Router, request: Request<Body>) -> (axum::http::StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[allow(dead_code)]
pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[allow(dead_code)]
pub fn json(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
