use axum::routing::get;
use axum::Router;
use folio_core::contract;

use crate::handlers::projects;
use crate::state::AppState;

/// Project gallery routes.
///
/// ```text
/// GET /api/projects       -> list_projects
/// GET /api/projects/{id}  -> get_project
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            &contract::PROJECTS_LIST.router_path(),
            get(projects::list_projects),
        )
        .route(
            &contract::PROJECT_GET.router_path(),
            get(projects::get_project),
        )
}
