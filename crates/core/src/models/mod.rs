//! Entity models and request DTOs.
//!
//! Models serialize with camelCase keys and generate TypeScript bindings via
//! `ts-rs`, so the frontend consumes the same definitions. With the `sqlx`
//! feature enabled they also derive `FromRow` for the snake_case columns.
//!
//! DTOs are only built through `from_payload`, which runs the schema
//! validators first.

pub mod message;
pub mod profile;
pub mod project;
pub mod testimonial;

pub use message::{Message, NewMessage};
pub use profile::{NewProfile, Profile, ProfileUpdate};
pub use project::{NewProject, Project};
pub use testimonial::{NewTestimonial, Testimonial};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::schema::{Entity, ValidationError};

/// Decode a payload the schema layer has already normalized.
pub(crate) fn decode_normalized<T: DeserializeOwned>(
    entity: Entity,
    normalized: Map<String, Value>,
) -> Result<T, ValidationError> {
    serde_json::from_value(Value::Object(normalized)).map_err(|e| {
        ValidationError::root(format!("{} payload could not be decoded: {e}", entity.name()))
    })
}
