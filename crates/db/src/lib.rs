//! Persistence for the portfolio site.
//!
//! [`storage::Storage`] is the only way the rest of the system reads or
//! writes persistent state. [`pg::PgStorage`] implements it over PostgreSQL
//! through the zero-sized repositories in [`repositories`];
//! [`memory::MemoryStorage`] implements it in process.

use sqlx::postgres::PgPoolOptions;

pub mod memory;
pub mod pg;
pub mod repositories;
pub mod seed;
pub mod storage;

pub use memory::MemoryStorage;
pub use pg::PgStorage;
pub use storage::{Storage, StorageAdmin, StorageError};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the SQL migrations under `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
