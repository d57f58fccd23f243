//! Contact-form message entity and its insert DTO.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::schema::{self, Entity, ValidationError};
use crate::types::{DbId, Timestamp};

/// A row from the `messages` table. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Message {
    #[ts(type = "number")]
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: Timestamp,
}

/// DTO for a contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl NewMessage {
    /// Validate a raw JSON payload against the message insert schema.
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let normalized = schema::validate(Entity::Message, payload)?;
        super::decode_normalized(Entity::Message, normalized)
    }
}
