use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Response;
use axum::Json;
use folio_core::contract;
use folio_core::models::NewMessage;
use folio_db::Storage;
use serde_json::Value;

use crate::error::AppResult;
use crate::response::contract_ok;
use crate::state::AppState;

/// POST /api/contact
///
/// Stores a visitor message and echoes the stored row with 201.
pub async fn create_message(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Response> {
    let route = &contract::CONTACT_CREATE;
    let Json(payload) = payload?;
    let input: NewMessage = route.decode_input(&payload)?;

    let message = state.storage.create_message(&input).await?;

    tracing::info!(message_id = message.id, "Contact message received");

    contract_ok(route, &message)
}
