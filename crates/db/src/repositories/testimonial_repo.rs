//! Repository for the `testimonials` table.

use folio_core::models::{NewTestimonial, Testimonial};
use sqlx::PgPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, author, role, content, display_order";

/// Provides read access and bulk seeding for testimonials.
pub struct TestimonialRepo;

impl TestimonialRepo {
    /// List all testimonials by display order, ties broken by insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials ORDER BY display_order, id");
        sqlx::query_as::<_, Testimonial>(&query)
            .fetch_all(pool)
            .await
    }

    /// Insert every testimonial in one transaction, returning the rows in input order.
    pub async fn insert_many(
        pool: &PgPool,
        inputs: &[NewTestimonial],
    ) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!(
            "INSERT INTO testimonials (author, role, content, display_order)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );

        let mut tx = pool.begin().await?;
        let mut created = Vec::with_capacity(inputs.len());
        for input in inputs {
            let testimonial = sqlx::query_as::<_, Testimonial>(&query)
                .bind(&input.author)
                .bind(&input.role)
                .bind(&input.content)
                .bind(input.display_order)
                .fetch_one(&mut *tx)
                .await?;
            created.push(testimonial);
        }
        tx.commit().await?;

        Ok(created)
    }
}
