//! Repository for the `profiles` table.

use folio_core::models::{NewProfile, Profile, ProfileUpdate};
use folio_core::types::DbId;
use sqlx::PgPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, title, picture_url, summary";

/// Provides access to the singleton profile row.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Fetch the profile. If more than one row somehow exists, the oldest wins.
    pub async fn find(pool: &PgPool) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Profile>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Insert a complete profile row, returning it.
    pub async fn create(pool: &PgPool, input: &NewProfile) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (name, title, picture_url, summary)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(&input.name)
            .bind(&input.title)
            .bind(&input.picture_url)
            .bind(&input.summary)
            .fetch_one(pool)
            .await
    }

    /// Update a profile. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ProfileUpdate,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profiles SET
                name = COALESCE($2, name),
                title = COALESCE($3, title),
                picture_url = COALESCE($4, picture_url),
                summary = COALESCE($5, summary)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.title)
            .bind(&input.picture_url)
            .bind(&input.summary)
            .fetch_optional(pool)
            .await
    }
}
