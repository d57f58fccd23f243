//! Startup population of default content.
//!
//! Each table is seeded only when it is empty, so running the routine again
//! after a restart is a no-op. An existing profile is never touched.

use folio_core::models::{NewProject, NewTestimonial, ProfileUpdate};

use crate::storage::{StorageAdmin, StorageError};

/// What a seeding pass inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub profile_created: bool,
    pub projects_inserted: usize,
    pub testimonials_inserted: usize,
}

impl SeedReport {
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }
}

/// The profile created on first start.
pub fn default_profile() -> ProfileUpdate {
    ProfileUpdate {
        name: Some("Alex Chen".to_string()),
        title: Some("AI Video Creator & Director".to_string()),
        picture_url: Some(
            "https://images.unsplash.com/photo-1522075469751-3a6694fb2f61".to_string(),
        ),
        summary: Some(
            "I specialize in creating next-generation video content using cutting-edge AI \
             technologies. With over 5 years of experience in digital media production and \
             2 years focusing exclusively on AI-driven workflows, I bring imaginative concepts \
             to life with stunning visuals and engaging narratives."
                .to_string(),
        ),
    }
}

/// The gallery shown on first start, in display order.
pub fn default_projects() -> Vec<NewProject> {
    const VIDEO: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
    vec![
        NewProject {
            title: "Neon Dreams".to_string(),
            description: "A cyberpunk short film fully generated using Midjourney and Runway Gen-2."
                .to_string(),
            video_url: VIDEO.to_string(),
            thumbnail_url: Some(
                "https://images.unsplash.com/photo-1605806616949-1e87b487cb2a".to_string(),
            ),
            display_order: 1,
        },
        NewProject {
            title: "Ethereal Echoes".to_string(),
            description: "Music video for an indie electronic artist, featuring AI-stylized \
                          performance capture."
                .to_string(),
            video_url: VIDEO.to_string(),
            thumbnail_url: Some(
                "https://images.unsplash.com/photo-1492691527719-9d1e07e534b4".to_string(),
            ),
            display_order: 2,
        },
        NewProject {
            title: "Future Fashion".to_string(),
            description: "AI fashion commercial concept blending traditional photography with \
                          Stable Diffusion elements."
                .to_string(),
            video_url: VIDEO.to_string(),
            thumbnail_url: Some(
                "https://images.unsplash.com/photo-1460925895917-afdab827c52f".to_string(),
            ),
            display_order: 3,
        },
    ]
}

/// The testimonials shown on first start, in display order.
pub fn default_testimonials() -> Vec<NewTestimonial> {
    vec![
        NewTestimonial {
            author: "Sarah Jenkins".to_string(),
            role: "Creative Director".to_string(),
            content: "Working with Alex was a game-changer for our agency. The AI pipelines \
                      they set up saved us weeks of production time."
                .to_string(),
            display_order: 1,
        },
        NewTestimonial {
            author: "David Wu".to_string(),
            role: "Indie Filmmaker".to_string(),
            content: "The quality of the AI generated visuals Alex produced for my short film \
                      completely blew my mind. True artistry."
                .to_string(),
            display_order: 2,
        },
    ]
}

/// Populate empty tables with the default content.
///
/// A single best-effort pass: the first failure is returned and nothing is
/// retried.
pub async fn seed_defaults(storage: &dyn StorageAdmin) -> Result<SeedReport, StorageError> {
    let mut report = SeedReport::default();

    if storage.get_profile().await?.is_none() {
        let profile = storage.update_profile(&default_profile()).await?;
        tracing::info!(profile_id = profile.id, "Seeded default profile");
        report.profile_created = true;
    }

    if storage.get_projects().await?.is_empty() {
        let created = storage.insert_projects(&default_projects()).await?;
        tracing::info!(count = created.len(), "Seeded default projects");
        report.projects_inserted = created.len();
    }

    if storage.get_testimonials().await?.is_empty() {
        let created = storage.insert_testimonials(&default_testimonials()).await?;
        tracing::info!(count = created.len(), "Seeded default testimonials");
        report.testimonials_inserted = created.len();
    }

    Ok(report)
}
