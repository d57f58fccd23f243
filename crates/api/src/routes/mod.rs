pub mod contact;
pub mod health;
pub mod profile;
pub mod projects;
pub mod testimonials;

use axum::http::StatusCode;
use axum::routing::any;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

/// Build the `/api` route tree. Paths come from the shared contract.
///
/// Route hierarchy:
///
/// ```text
/// /api/profile                 get, update
/// /api/projects                list
/// /api/projects/{id}           get
/// /api/testimonials            list
/// /api/contact                 create (POST)
/// /api/{*path}                 404 for anything else under /api
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(profile::router())
        .merge(projects::router())
        .merge(testimonials::router())
        .merge(contact::router())
        .route("/api/{*path}", any(api_not_found))
}

/// Unknown API paths answer JSON 404 rather than falling through to the
/// static frontend.
async fn api_not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "message": "Not found" })))
}
