//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use registry_core::UserGateway;
use registry_server::{create_router, AppState};
use registry_storage::SqliteUserGateway;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

/// Router backed by a real SQLite file in a temp dir
///
/// The `TempDir` must outlive the router.
pub async fn create_test_app() -> (Router, SqliteUserGateway, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

    let gateway = SqliteUserGateway::connect(&db_url, 5).await.unwrap();
    let app = create_router(AppState::new(Arc::new(gateway.clone())));

    (app, gateway, temp_dir)
}

/// Router backed by any gateway, typically a mock
pub fn app_with_gateway(gateway: impl UserGateway + 'static) -> Router {
    create_router(AppState::new(Arc::new(gateway)))
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn post_json(app: &Router, uri: &str, body: &serde_json::Value) -> Response<Body> {
    post_raw(app, uri, serde_json::to_string(body).unwrap()).await
}

pub async fn post_raw(app: &Router, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Split a response into status and parsed JSON body
pub async fn json_body(response: Response<Body>) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&body_bytes).unwrap();
    (status, value)
}

/// Test user payloads
pub mod fixtures {
    pub const TEST_DNI: &str = "1234567890";
    pub const TEST_NAME: &str = "Test";

    pub fn test_user_json() -> serde_json::Value {
        serde_json::json!({ "dni": TEST_DNI, "name": TEST_NAME })
    }
}
