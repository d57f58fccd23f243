//! PostgreSQL implementation of the storage interface.

use async_trait::async_trait;
use folio_core::models::{
    Message, NewMessage, NewProject, NewTestimonial, Profile, ProfileUpdate, Project, Testimonial,
};
use folio_core::types::DbId;

use crate::repositories::{MessageRepo, ProfileRepo, ProjectRepo, TestimonialRepo};
use crate::storage::{Storage, StorageAdmin, StorageError};
use crate::DbPool;

/// [`Storage`] backed by a PostgreSQL pool. Cheap to clone.
#[derive(Debug, Clone)]
pub struct PgStorage {
    pool: DbPool,
}

impl PgStorage {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl Storage for PgStorage {
    async fn get_profile(&self) -> Result<Option<Profile>, StorageError> {
        Ok(ProfileRepo::find(&self.pool).await?)
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile, StorageError> {
        let Some(existing) = ProfileRepo::find(&self.pool).await? else {
            let profile = ProfileRepo::create(&self.pool, &update.with_defaults()).await?;
            tracing::info!(profile_id = profile.id, "Profile created");
            return Ok(profile);
        };

        // The row can only vanish between the two statements if something
        // outside this service deletes it.
        ProfileRepo::update(&self.pool, existing.id, update)
            .await?
            .ok_or(StorageError::Database(sqlx::Error::RowNotFound))
    }

    async fn get_projects(&self) -> Result<Vec<Project>, StorageError> {
        Ok(ProjectRepo::list(&self.pool).await?)
    }

    async fn get_project(&self, id: DbId) -> Result<Option<Project>, StorageError> {
        Ok(ProjectRepo::find_by_id(&self.pool, id).await?)
    }

    async fn get_testimonials(&self) -> Result<Vec<Testimonial>, StorageError> {
        Ok(TestimonialRepo::list(&self.pool).await?)
    }

    async fn create_message(&self, input: &NewMessage) -> Result<Message, StorageError> {
        Ok(MessageRepo::create(&self.pool, input).await?)
    }
}

#[async_trait]
impl StorageAdmin for PgStorage {
    async fn health_check(&self) -> Result<(), StorageError> {
        Ok(crate::health_check(&self.pool).await?)
    }

    async fn insert_projects(&self, projects: &[NewProject]) -> Result<Vec<Project>, StorageError> {
        Ok(ProjectRepo::insert_many(&self.pool, projects).await?)
    }

    async fn insert_testimonials(
        &self,
        testimonials: &[NewTestimonial],
    ) -> Result<Vec<Testimonial>, StorageError> {
        Ok(TestimonialRepo::insert_many(&self.pool, testimonials).await?)
    }
}
