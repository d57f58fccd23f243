use axum::extract::State;
use axum::response::Response;
use folio_core::contract;
use folio_db::Storage;

use crate::error::AppResult;
use crate::response::contract_ok;
use crate::state::AppState;

/// GET /api/testimonials
pub async fn list_testimonials(State(state): State<AppState>) -> AppResult<Response> {
    let testimonials = state.storage.get_testimonials().await?;
    contract_ok(&contract::TESTIMONIALS_LIST, &testimonials)
}
