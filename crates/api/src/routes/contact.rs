use axum::routing::post;
use axum::Router;
use folio_core::contract;

use crate::handlers::contact;
use crate::state::AppState;

/// POST /api/contact -> create_message
pub fn router() -> Router<AppState> {
    Router::new().route(
        &contract::CONTACT_CREATE.router_path(),
        post(contact::create_message),
    )
}
