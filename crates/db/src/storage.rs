//! The storage interface.
//!
//! [`Storage`] is the request-facing capability set. [`StorageAdmin`] adds
//! the maintenance operations used by the seed routine and the health
//! endpoint.

use async_trait::async_trait;
use folio_core::models::{
    Message, NewMessage, NewProject, NewTestimonial, Profile, ProfileUpdate, Project, Testimonial,
};
use folio_core::types::DbId;

/// The backing store failed. Never retried.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Read/write access to the four portfolio tables.
#[async_trait]
pub trait Storage: Send + Sync {
    /// The profile row, if one exists.
    async fn get_profile(&self) -> Result<Option<Profile>, StorageError>;

    /// Create the profile from `update` merged over the defaults when none
    /// exists, otherwise merge `update` into the existing row.
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile, StorageError>;

    /// All projects ascending by display order, ties by insertion order.
    async fn get_projects(&self) -> Result<Vec<Project>, StorageError>;

    async fn get_project(&self, id: DbId) -> Result<Option<Project>, StorageError>;

    /// All testimonials ascending by display order, ties by insertion order.
    async fn get_testimonials(&self) -> Result<Vec<Testimonial>, StorageError>;

    /// Persist a contact message; the store assigns `id` and `created_at`.
    async fn create_message(&self, input: &NewMessage) -> Result<Message, StorageError>;
}

/// Maintenance operations kept off the request path.
#[async_trait]
pub trait StorageAdmin: Storage {
    /// Confirm the store is reachable.
    async fn health_check(&self) -> Result<(), StorageError>;

    /// Insert all projects atomically, in order.
    async fn insert_projects(&self, projects: &[NewProject]) -> Result<Vec<Project>, StorageError>;

    /// Insert all testimonials atomically, in order.
    async fn insert_testimonials(
        &self,
        testimonials: &[NewTestimonial],
    ) -> Result<Vec<Testimonial>, StorageError>;
}
