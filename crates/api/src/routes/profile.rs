use axum::routing::get;
use axum::Router;
use folio_core::contract;

use crate::handlers::profile;
use crate::state::AppState;

/// Profile routes.
///
/// ```text
/// GET /api/profile  -> get_profile
/// PUT /api/profile  -> update_profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        &contract::PROFILE_GET.router_path(),
        get(profile::get_profile).put(profile::update_profile),
    )
}
