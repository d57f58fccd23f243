//! In-process implementation of the storage interface.
//!
//! Mirrors the PostgreSQL semantics (per-table id sequences, display-order
//! sorting with insertion-order ties, server-set timestamps) so handlers can
//! be exercised without a database.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use folio_core::models::{
    Message, NewMessage, NewProject, NewTestimonial, Profile, ProfileUpdate, Project, Testimonial,
};
use folio_core::types::DbId;
use tokio::sync::RwLock;

use crate::storage::{Storage, StorageAdmin, StorageError};

#[derive(Debug, Default)]
struct Tables {
    profile: Option<Profile>,
    projects: Vec<Project>,
    testimonials: Vec<Testimonial>,
    messages: Vec<Message>,
    profile_seq: DbId,
    project_seq: DbId,
    testimonial_seq: DbId,
    message_seq: DbId,
}

fn next(seq: &mut DbId) -> DbId {
    *seq += 1;
    *seq
}

/// [`Storage`] held in memory behind a tokio `RwLock`.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    tables: RwLock<Tables>,
    unavailable: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// When set, every operation fails with [`StorageError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Every stored contact message in insertion order.
    pub async fn messages(&self) -> Vec<Message> {
        self.tables.read().await.messages.clone()
    }

    /// Number of profile rows (0 or 1).
    pub async fn profile_count(&self) -> usize {
        usize::from(self.tables.read().await.profile.is_some())
    }

    fn ensure_available(&self) -> Result<(), StorageError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable(
                "in-memory store is switched off".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get_profile(&self) -> Result<Option<Profile>, StorageError> {
        self.ensure_available()?;
        Ok(self.tables.read().await.profile.clone())
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile, StorageError> {
        self.ensure_available()?;
        let mut tables = self.tables.write().await;

        if let Some(profile) = tables.profile.as_mut() {
            profile.apply(update);
            return Ok(profile.clone());
        }

        let new = update.with_defaults();
        let profile = Profile {
            id: next(&mut tables.profile_seq),
            name: new.name,
            title: new.title,
            picture_url: new.picture_url,
            summary: new.summary,
        };
        tables.profile = Some(profile.clone());
        Ok(profile)
    }

    async fn get_projects(&self) -> Result<Vec<Project>, StorageError> {
        self.ensure_available()?;
        let mut projects = self.tables.read().await.projects.clone();
        projects.sort_by_key(|p| (p.display_order, p.id));
        Ok(projects)
    }

    async fn get_project(&self, id: DbId) -> Result<Option<Project>, StorageError> {
        self.ensure_available()?;
        let tables = self.tables.read().await;
        Ok(tables.projects.iter().find(|p| p.id == id).cloned())
    }

    async fn get_testimonials(&self) -> Result<Vec<Testimonial>, StorageError> {
        self.ensure_available()?;
        let mut testimonials = self.tables.read().await.testimonials.clone();
        testimonials.sort_by_key(|t| (t.display_order, t.id));
        Ok(testimonials)
    }

    async fn create_message(&self, input: &NewMessage) -> Result<Message, StorageError> {
        self.ensure_available()?;
        let mut tables = self.tables.write().await;
        let message = Message {
            id: next(&mut tables.message_seq),
            name: input.name.clone(),
            email: input.email.clone(),
            message: input.message.clone(),
            created_at: chrono::Utc::now(),
        };
        tables.messages.push(message.clone());
        Ok(message)
    }
}

#[async_trait]
impl StorageAdmin for MemoryStorage {
    async fn health_check(&self) -> Result<(), StorageError> {
        self.ensure_available()
    }

    async fn insert_projects(&self, projects: &[NewProject]) -> Result<Vec<Project>, StorageError> {
        self.ensure_available()?;
        let mut tables = self.tables.write().await;
        let mut created = Vec::with_capacity(projects.len());
        for input in projects {
            let project = Project {
                id: next(&mut tables.project_seq),
                title: input.title.clone(),
                description: input.description.clone(),
                video_url: input.video_url.clone(),
                thumbnail_url: input.thumbnail_url.clone(),
                display_order: input.display_order,
            };
            tables.projects.push(project.clone());
            created.push(project);
        }
        Ok(created)
    }

    async fn insert_testimonials(
        &self,
        testimonials: &[NewTestimonial],
    ) -> Result<Vec<Testimonial>, StorageError> {
        self.ensure_available()?;
        let mut tables = self.tables.write().await;
        let mut created = Vec::with_capacity(testimonials.len());
        for input in testimonials {
            let testimonial = Testimonial {
                id: next(&mut tables.testimonial_seq),
                author: input.author.clone(),
                role: input.role.clone(),
                content: input.content.clone(),
                display_order: input.display_order,
            };
            tables.testimonials.push(testimonial.clone());
            created.push(testimonial);
        }
        Ok(created)
    }
}
