//! Repository for the `projects` table.

use folio_core::models::{NewProject, Project};
use folio_core::types::DbId;
use sqlx::PgPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, video_url, thumbnail_url, display_order";

/// Provides read access and bulk seeding for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// List all projects by display order, ties broken by insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY display_order, id");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert every project in one transaction, returning the rows in input order.
    pub async fn insert_many(
        pool: &PgPool,
        inputs: &[NewProject],
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, description, video_url, thumbnail_url, display_order)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );

        let mut tx = pool.begin().await?;
        let mut created = Vec::with_capacity(inputs.len());
        for input in inputs {
            let project = sqlx::query_as::<_, Project>(&query)
                .bind(&input.title)
                .bind(&input.description)
                .bind(&input.video_url)
                .bind(&input.thumbnail_url)
                .bind(input.display_order)
                .fetch_one(&mut *tx)
                .await?;
            created.push(project);
        }
        tx.commit().await?;

        Ok(created)
    }
}
