//! Profile entity (singleton) and its DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::schema::{self, Entity, ValidationError};
use crate::types::DbId;

/// Name used when a profile is created without one.
pub const DEFAULT_NAME: &str = "Hassan Yehia";
/// Title used when a profile is created without one.
pub const DEFAULT_TITLE: &str = "AI Video Creator";
/// Placeholder portrait.
pub const DEFAULT_PICTURE_URL: &str =
    "https://images.unsplash.com/photo-1522075469751-3a6694fb2f61";
/// Placeholder summary.
pub const DEFAULT_SUMMARY: &str = "Creating next generation AI videos.";

/// The single row of the `profiles` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Profile {
    #[ts(type = "number")]
    pub id: DbId,
    pub name: String,
    pub title: String,
    pub picture_url: String,
    pub summary: String,
}

impl Profile {
    /// Merge the supplied fields of `update` into this profile in place.
    pub fn apply(&mut self, update: &ProfileUpdate) {
        if let Some(name) = &update.name {
            self.name.clone_from(name);
        }
        if let Some(title) = &update.title {
            self.title.clone_from(title);
        }
        if let Some(picture_url) = &update.picture_url {
            self.picture_url.clone_from(picture_url);
        }
        if let Some(summary) = &update.summary {
            self.summary.clone_from(summary);
        }
    }
}

/// Complete insert shape for a new profile row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfile {
    pub name: String,
    pub title: String,
    pub picture_url: String,
    pub summary: String,
}

/// DTO for a partial profile update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub picture_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub summary: Option<String>,
}

impl ProfileUpdate {
    /// Validate a raw JSON payload against the partial profile schema.
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let normalized = schema::validate_partial(Entity::Profile, payload)?;
        super::decode_normalized(Entity::Profile, normalized)
    }

    /// `true` when no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.title.is_none()
            && self.picture_url.is_none()
            && self.summary.is_none()
    }

    /// Build the insert shape for a profile that does not exist yet: supplied
    /// fields win, everything else falls back to the fixed defaults.
    pub fn with_defaults(&self) -> NewProfile {
        NewProfile {
            name: self.name.clone().unwrap_or_else(|| DEFAULT_NAME.to_string()),
            title: self.title.clone().unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            picture_url: self
                .picture_url
                .clone()
                .unwrap_or_else(|| DEFAULT_PICTURE_URL.to_string()),
            summary: self
                .summary
                .clone()
                .unwrap_or_else(|| DEFAULT_SUMMARY.to_string()),
        }
    }
}
