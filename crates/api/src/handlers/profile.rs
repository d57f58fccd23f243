//! Handlers for the singleton profile.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Response;
use axum::Json;
use folio_core::contract;
use folio_core::error::CoreError;
use folio_core::models::ProfileUpdate;
use folio_db::Storage;
use serde_json::Value;

use crate::error::AppResult;
use crate::response::contract_ok;
use crate::state::AppState;

/// GET /api/profile
///
/// Returns the profile. When none exists yet it is created with the default
/// content, unless `PROFILE_AUTOCREATE` is off, in which case the answer is 404.
pub async fn get_profile(State(state): State<AppState>) -> AppResult<Response> {
    let route = &contract::PROFILE_GET;

    let profile = match state.storage.get_profile().await? {
        Some(profile) => profile,
        None if state.config.profile_autocreate => {
            let profile = state
                .storage
                .update_profile(&ProfileUpdate::default())
                .await?;
            tracing::info!(profile_id = profile.id, "Profile created on first read");
            profile
        }
        None => {
            return Err(CoreError::NotFound {
                entity: "Profile",
                id: None,
            }
            .into())
        }
    };

    contract_ok(route, &profile)
}

/// PUT /api/profile
///
/// Partial update: supplied fields are merged into the existing profile, or
/// into the defaults when none exists yet.
pub async fn update_profile(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Response> {
    let route = &contract::PROFILE_UPDATE;
    let Json(payload) = payload?;
    let update: ProfileUpdate = route.decode_input(&payload)?;

    let profile = state.storage.update_profile(&update).await?;

    tracing::info!(
        profile_id = profile.id,
        name = update.name.is_some(),
        title = update.title.is_some(),
        picture_url = update.picture_url.is_some(),
        summary = update.summary.is_some(),
        "Profile updated",
    );

    contract_ok(route, &profile)
}
