use crate::schema::ValidationError;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A singleton or addressed resource does not exist. `id` is `None` for
    /// singletons such as the profile.
    #[error("{}", not_found_message(entity, *id))]
    NotFound {
        entity: &'static str,
        id: Option<DbId>,
    },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Internal error: {0}")]
    Internal(String),
}

fn not_found_message(entity: &str, id: Option<DbId>) -> String {
    match id {
        Some(id) => format!("{entity} with id {id} not found"),
        None => format!("{entity} not found"),
    }
}
