use axum::extract::{Path, State};
use axum::response::Response;
use folio_core::contract;
use folio_core::error::CoreError;
use folio_db::Storage;

use crate::error::AppResult;
use crate::response::contract_ok;
use crate::state::AppState;

/// GET /api/projects
///
/// All projects ordered by `displayOrder` ascending.
pub async fn list_projects(State(state): State<AppState>) -> AppResult<Response> {
    let projects = state.storage.get_projects().await?;
    contract_ok(&contract::PROJECTS_LIST, &projects)
}

/// GET /api/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Response> {
    let id = contract::parse_path_id(&raw_id)?;

    let project = state
        .storage
        .get_project(id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Project",
            id: Some(id),
        })?;

    contract_ok(&contract::PROJECT_GET, &project)
}
