//! Integration tests for the health check endpoint and general HTTP
//! behaviour (request ids, CORS, static frontend fallback).

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, build_app_with, build_test_app, get, test_config};
use folio_api::config::ServerConfig;
use folio_db::MemoryStorage;
use http_body_util::BodyExt;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let app = build_test_app(Arc::new(MemoryStorage::new()));
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

#[tokio::test]
async fn health_check_reports_degraded_storage() {
    let store = Arc::new(MemoryStorage::new());
    store.set_unavailable(true);
    let app = build_test_app(store);

    let json = body_json(get(app, "/health").await).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = build_test_app(Arc::new(MemoryStorage::new()));
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Middleware
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = build_test_app(Arc::new(MemoryStorage::new()));
    let response = get(app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

#[tokio::test]
async fn cors_preflight_allows_configured_origin() {
    let app = build_test_app(Arc::new(MemoryStorage::new()));
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/projects")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "GET")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "http://localhost:5173"
    );
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-credentials")
            .unwrap(),
        "true"
    );
}

// ---------------------------------------------------------------------------
// Static frontend
// ---------------------------------------------------------------------------

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn static_dir_serves_files_with_index_fallback() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<html>folio</html>").unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log('folio')").unwrap();

    let config = ServerConfig {
        static_dir: Some(dir.path().to_path_buf()),
        ..test_config()
    };
    let app = build_app_with(Arc::new(MemoryStorage::new()), config);

    let asset = get(app.clone(), "/app.js").await;
    assert_eq!(asset.status(), StatusCode::OK);
    assert_eq!(body_text(asset).await, "console.log('folio')");

    let deep_link = get(app.clone(), "/projects/3").await;
    assert_eq!(deep_link.status(), StatusCode::OK);
    assert_eq!(body_text(deep_link).await, "<html>folio</html>");

    // API routes still win over the fallback.
    let api = get(app.clone(), "/api/projects").await;
    assert_eq!(api.status(), StatusCode::OK);
    let unknown_api = get(app, "/api/nope").await;
    assert_eq!(unknown_api.status(), StatusCode::NOT_FOUND);
}
