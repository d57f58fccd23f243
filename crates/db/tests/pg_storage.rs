//! Integration tests for the PostgreSQL storage implementation.
//!
//! Exercises the repositories and `PgStorage` against a real database:
//! - Profile create-with-defaults vs merge-into-existing
//! - Display-order sorting with insertion-order ties
//! - Server-assigned message ids and timestamps
//! - Seed idempotence

use folio_core::models::profile::{DEFAULT_NAME, DEFAULT_PICTURE_URL, DEFAULT_SUMMARY};
use folio_core::models::{NewMessage, NewProject, NewTestimonial, ProfileUpdate};
use folio_db::seed::{self, SeedReport};
use folio_db::{PgStorage, Storage, StorageAdmin};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(title: &str, display_order: i32) -> NewProject {
    NewProject {
        title: title.to_string(),
        description: format!("About {title}"),
        video_url: format!("https://video.example/{title}"),
        thumbnail_url: None,
        display_order,
    }
}

fn new_testimonial(author: &str, display_order: i32) -> NewTestimonial {
    NewTestimonial {
        author: author.to_string(),
        role: "Client".to_string(),
        content: format!("{author} was happy"),
        display_order,
    }
}

async fn profile_rows(pool: &PgPool) -> i64 {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM profiles")
        .fetch_one(pool)
        .await
        .unwrap();
    count.0
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_profile_creates_with_defaults(pool: PgPool) {
    let storage = PgStorage::new(pool.clone());
    assert!(storage.get_profile().await.unwrap().is_none());

    let profile = storage
        .update_profile(&ProfileUpdate {
            title: Some("Director".to_string()),
            ..ProfileUpdate::default()
        })
        .await
        .unwrap();

    assert_eq!(profile.name, DEFAULT_NAME);
    assert_eq!(profile.title, "Director");
    assert_eq!(profile.picture_url, DEFAULT_PICTURE_URL);
    assert_eq!(profile.summary, DEFAULT_SUMMARY);
    assert_eq!(profile_rows(&pool).await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_profile_merges_into_existing(pool: PgPool) {
    let storage = PgStorage::new(pool.clone());
    let original = storage
        .update_profile(&ProfileUpdate::default())
        .await
        .unwrap();

    let updated = storage
        .update_profile(&ProfileUpdate {
            summary: Some("New summary".to_string()),
            ..ProfileUpdate::default()
        })
        .await
        .unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.summary, "New summary");
    assert_eq!(updated.name, original.name);
    assert_eq!(updated.title, original.title);
    assert_eq!(updated.picture_url, original.picture_url);
    assert_eq!(profile_rows(&pool).await, 1);
}

// ---------------------------------------------------------------------------
// Projects & testimonials
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_projects_are_sorted_by_display_order(pool: PgPool) {
    let storage = PgStorage::new(pool);
    storage
        .insert_projects(&[
            new_project("third", 5),
            new_project("first", 1),
            new_project("second", 1),
        ])
        .await
        .unwrap();

    let titles: Vec<String> = storage
        .get_projects()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(titles, ["first", "second", "third"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_project_by_id(pool: PgPool) {
    let storage = PgStorage::new(pool);
    let created = storage
        .insert_projects(&[new_project("only", 0)])
        .await
        .unwrap();

    let found = storage.get_project(created[0].id).await.unwrap();
    assert_eq!(found, Some(created[0].clone()));

    let missing = storage.get_project(999_999).await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_testimonials_are_sorted_by_display_order(pool: PgPool) {
    let storage = PgStorage::new(pool);
    storage
        .insert_testimonials(&[new_testimonial("b", 2), new_testimonial("a", 1)])
        .await
        .unwrap();

    let testimonials = storage.get_testimonials().await.unwrap();
    assert!(testimonials
        .windows(2)
        .all(|w| w[0].display_order <= w[1].display_order));
    assert_eq!(testimonials[0].author, "a");
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_message_assigns_id_and_created_at(pool: PgPool) {
    let storage = PgStorage::new(pool.clone());
    let message = storage
        .create_message(&NewMessage {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            message: "Hi".to_string(),
        })
        .await
        .unwrap();

    assert!(message.id > 0);
    assert_eq!(message.email, "jane@x.com");

    let stored: (String, String) =
        sqlx::query_as("SELECT name, message FROM messages WHERE id = $1")
            .bind(message.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(stored, ("Jane".to_string(), "Hi".to_string()));
}

// ---------------------------------------------------------------------------
// Seed routine
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seed_is_idempotent(pool: PgPool) {
    let storage = PgStorage::new(pool.clone());

    let first = seed::seed_defaults(&storage).await.unwrap();
    assert_eq!(
        first,
        SeedReport {
            profile_created: true,
            projects_inserted: 3,
            testimonials_inserted: 2,
        }
    );
    let projects = storage.get_projects().await.unwrap();
    let testimonials = storage.get_testimonials().await.unwrap();

    let second = seed::seed_defaults(&storage).await.unwrap();
    assert!(second.is_noop());
    assert_eq!(profile_rows(&pool).await, 1);
    assert_eq!(storage.get_projects().await.unwrap(), projects);
    assert_eq!(storage.get_testimonials().await.unwrap(), testimonials);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_health_check(pool: PgPool) {
    folio_db::health_check(&pool).await.unwrap();
    PgStorage::new(pool).health_check().await.unwrap();
}
