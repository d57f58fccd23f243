//! Contract-checked JSON responses.
//!
//! Handlers never serialize directly: [`contract_json`] validates the body
//! against the schema the route declares for the status, so a handler that
//! drifts from the contract answers 500 instead of sending an undeclared
//! shape.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use folio_core::contract::Route;
use serde::Serialize;

use crate::error::{AppError, AppResult};

/// Serialize `body`, check it against `route`'s declared response for
/// `status`, and build the response.
pub fn contract_json<T: Serialize>(route: &Route, status: StatusCode, body: &T) -> AppResult<Response> {
    let value = serde_json::to_value(body).map_err(|e| {
        AppError::InternalError(format!("failed to serialize {} response: {e}", route.name))
    })?;
    route.check_response(status.as_u16(), &value)?;
    Ok((status, Json(value)).into_response())
}

/// Respond with the route's declared success status.
pub fn contract_ok<T: Serialize>(route: &Route, body: &T) -> AppResult<Response> {
    let status = StatusCode::from_u16(route.success_status()).map_err(|e| {
        AppError::InternalError(format!("{} declares an invalid status: {e}", route.name))
    })?;
    contract_json(route, status, body)
}
