//! Testimonial entity and its insert DTO.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::schema::{self, Entity, ValidationError};
use crate::types::DbId;

/// A row from the `testimonials` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Testimonial {
    #[ts(type = "number")]
    pub id: DbId,
    pub author: String,
    pub role: String,
    pub content: String,
    pub display_order: i32,
}

/// DTO for inserting a testimonial. Only the seed routine creates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewTestimonial {
    pub author: String,
    pub role: String,
    pub content: String,
    pub display_order: i32,
}

impl NewTestimonial {
    /// Validate a raw JSON payload against the testimonial insert schema.
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let normalized = schema::validate(Entity::Testimonial, payload)?;
        super::decode_normalized(Entity::Testimonial, normalized)
    }
}
