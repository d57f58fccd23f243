//! Repository for the `messages` table.

use folio_core::models::{Message, NewMessage};
use sqlx::PgPool;

const COLUMNS: &str = "id, name, email, message, created_at";

/// Provides inserts for contact messages. Messages are never read back
/// through the API.
pub struct MessageRepo;

impl MessageRepo {
    /// Insert a new message, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewMessage) -> Result<Message, sqlx::Error> {
        let query = format!(
            "INSERT INTO messages (name, email, message)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }
}
