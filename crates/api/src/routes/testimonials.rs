use axum::routing::get;
use axum::Router;
use folio_core::contract;

use crate::handlers::testimonials;
use crate::state::AppState;

/// GET /api/testimonials -> list_testimonials
pub fn router() -> Router<AppState> {
    Router::new().route(
        &contract::TESTIMONIALS_LIST.router_path(),
        get(testimonials::list_testimonials),
    )
}
