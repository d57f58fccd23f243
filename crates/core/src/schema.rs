//! Schema & validation layer.
//!
//! Declares the canonical field set of every entity and derives the input
//! validators from it: the insert validator ([`validate`]), the partial
//! update validator ([`validate_partial`]) and the stored-row validator
//! ([`validate_record`]) used to check response bodies.
//!
//! All three report the first offending field in declaration order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A payload failed validation.
///
/// Serializes as the `{ "message": ..., "field": ... }` body of a 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ValidationError {
    /// An error attributed to a named field.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// An error about the payload as a whole.
    pub fn root(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Field declarations
// ---------------------------------------------------------------------------

/// Value type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// 64-bit surrogate key.
    Id,
    Text,
    /// 32-bit signed integer.
    Integer,
    /// RFC 3339 timestamp string.
    Timestamp,
}

/// How a field participates in inserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Must be present and non-null.
    Required,
    /// May be absent or `null`.
    Optional,
    /// May be absent or `null`; the integer default is filled in.
    Defaulted(i64),
    /// Assigned by the store; stripped from insert payloads.
    Generated,
}

/// One column of an entity as seen over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// camelCase JSON name.
    pub name: &'static str,
    pub kind: FieldKind,
    pub presence: Presence,
}

impl FieldSpec {
    const fn new(name: &'static str, kind: FieldKind, presence: Presence) -> Self {
        Self {
            name,
            kind,
            presence,
        }
    }

    /// Whether a stored row may carry `null` for this field.
    pub fn is_nullable(&self) -> bool {
        matches!(self.presence, Presence::Optional)
    }
}

const ID: FieldSpec = FieldSpec::new("id", FieldKind::Id, Presence::Generated);
const DISPLAY_ORDER: FieldSpec =
    FieldSpec::new("displayOrder", FieldKind::Integer, Presence::Defaulted(0));

const PROFILE_FIELDS: &[FieldSpec] = &[
    ID,
    FieldSpec::new("name", FieldKind::Text, Presence::Required),
    FieldSpec::new("title", FieldKind::Text, Presence::Required),
    FieldSpec::new("pictureUrl", FieldKind::Text, Presence::Required),
    FieldSpec::new("summary", FieldKind::Text, Presence::Required),
];

const PROJECT_FIELDS: &[FieldSpec] = &[
    ID,
    FieldSpec::new("title", FieldKind::Text, Presence::Required),
    FieldSpec::new("description", FieldKind::Text, Presence::Required),
    FieldSpec::new("videoUrl", FieldKind::Text, Presence::Required),
    FieldSpec::new("thumbnailUrl", FieldKind::Text, Presence::Optional),
    DISPLAY_ORDER,
];

const TESTIMONIAL_FIELDS: &[FieldSpec] = &[
    ID,
    FieldSpec::new("author", FieldKind::Text, Presence::Required),
    FieldSpec::new("role", FieldKind::Text, Presence::Required),
    FieldSpec::new("content", FieldKind::Text, Presence::Required),
    DISPLAY_ORDER,
];

const MESSAGE_FIELDS: &[FieldSpec] = &[
    ID,
    FieldSpec::new("name", FieldKind::Text, Presence::Required),
    FieldSpec::new("email", FieldKind::Text, Presence::Required),
    FieldSpec::new("message", FieldKind::Text, Presence::Required),
    FieldSpec::new("createdAt", FieldKind::Timestamp, Presence::Generated),
];

/// The four persisted entity types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Profile,
    Project,
    Testimonial,
    Message,
}

impl Entity {
    /// Human-readable entity name, used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Project => "Project",
            Self::Testimonial => "Testimonial",
            Self::Message => "Message",
        }
    }

    /// Canonical field set in declaration order.
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            Self::Profile => PROFILE_FIELDS,
            Self::Project => PROJECT_FIELDS,
            Self::Testimonial => TESTIMONIAL_FIELDS,
            Self::Message => MESSAGE_FIELDS,
        }
    }

    /// Look up a single field by its JSON name.
    pub fn field(self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|f| f.name == name)
    }
}

// ---------------------------------------------------------------------------
// Validators
// ---------------------------------------------------------------------------

/// Validate an insert payload for `entity`.
///
/// Returns the normalized insert shape: generated fields and unknown keys are
/// dropped, absent optional fields become `null`, absent defaulted fields take
/// their default.
pub fn validate(entity: Entity, payload: &Value) -> Result<Map<String, Value>, ValidationError> {
    let object = as_object(entity, payload)?;
    let mut normalized = Map::new();

    for field in entity.fields() {
        let supplied = object.get(field.name).filter(|v| !v.is_null());
        let value = match (field.presence, supplied) {
            (Presence::Generated, _) => continue,
            (Presence::Required, None) => {
                return Err(ValidationError::field(
                    field.name,
                    format!("{} is required", field.name),
                ));
            }
            (Presence::Optional, None) => Value::Null,
            (Presence::Defaulted(default), None) => Value::from(default),
            (_, Some(value)) => {
                check_kind(field, value)?;
                value.clone()
            }
        };
        normalized.insert(field.name.to_string(), value);
    }

    Ok(normalized)
}

/// Validate a partial update payload for `entity`.
///
/// Every non-generated field becomes optional; supplied fields keep their
/// type constraints and may only be `null` when the column is nullable. Only
/// supplied fields appear in the result.
pub fn validate_partial(
    entity: Entity,
    payload: &Value,
) -> Result<Map<String, Value>, ValidationError> {
    let object = as_object(entity, payload)?;
    let mut normalized = Map::new();

    for field in entity.fields() {
        if field.presence == Presence::Generated {
            continue;
        }
        let Some(value) = object.get(field.name) else {
            continue;
        };
        if value.is_null() {
            if !field.is_nullable() {
                return Err(ValidationError::field(
                    field.name,
                    format!("{} must not be null", field.name),
                ));
            }
        } else {
            check_kind(field, value)?;
        }
        normalized.insert(field.name.to_string(), value.clone());
    }

    Ok(normalized)
}

/// Validate a full stored row of `entity`, generated fields included.
pub fn validate_record(entity: Entity, value: &Value) -> Result<(), ValidationError> {
    let object = as_object(entity, value)?;

    for field in entity.fields() {
        match object.get(field.name).filter(|v| !v.is_null()) {
            Some(v) => check_kind(field, v)?,
            None if field.is_nullable() => {}
            None => {
                return Err(ValidationError::field(
                    field.name,
                    format!("{} is required", field.name),
                ));
            }
        }
    }

    Ok(())
}

fn as_object<'a>(entity: Entity, value: &'a Value) -> Result<&'a Map<String, Value>, ValidationError> {
    value.as_object().ok_or_else(|| {
        ValidationError::root(format!("{} payload must be a JSON object", entity.name()))
    })
}

fn check_kind(field: &FieldSpec, value: &Value) -> Result<(), ValidationError> {
    let ok = match field.kind {
        FieldKind::Text => value.is_string(),
        FieldKind::Id => value.as_i64().is_some(),
        FieldKind::Integer => value
            .as_i64()
            .is_some_and(|n| i32::try_from(n).is_ok()),
        FieldKind::Timestamp => value
            .as_str()
            .is_some_and(|s| chrono::DateTime::parse_from_rfc3339(s).is_ok()),
    };
    if ok {
        return Ok(());
    }

    let expected = match field.kind {
        FieldKind::Text => "a string",
        FieldKind::Id => "an integer",
        FieldKind::Integer => "a 32-bit integer",
        FieldKind::Timestamp => "an RFC 3339 timestamp",
    };
    Err(ValidationError::field(
        field.name,
        format!("{} must be {expected}", field.name),
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
