//! Project entity (gallery item) and its insert DTO.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::schema::{self, Entity, ValidationError};
use crate::types::DbId;

/// A row from the `projects` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Project {
    #[ts(type = "number")]
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub display_order: i32,
}

/// DTO for inserting a project. Only the seed routine creates projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub display_order: i32,
}

impl NewProject {
    /// Validate a raw JSON payload against the project insert schema.
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let normalized = schema::validate(Entity::Project, payload)?;
        super::decode_normalized(Entity::Project, normalized)
    }
}
