//! End-to-end tests of the HTTP API over PostgreSQL.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{build_app_with, expect_json, get, post_json, put_json, test_config};
use folio_db::{seed, PgStorage};
use serde_json::json;
use sqlx::PgPool;

fn app_for(pool: PgPool) -> axum::Router {
    build_app_with(Arc::new(PgStorage::new(pool)), test_config())
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn seeded_database_serves_ordered_content(pool: PgPool) {
    seed::seed_defaults(&PgStorage::new(pool.clone())).await.unwrap();
    let app = app_for(pool);

    let projects = expect_json(get(app.clone(), "/api/projects").await, StatusCode::OK).await;
    let orders: Vec<i64> = projects
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["displayOrder"].as_i64().unwrap())
        .collect();
    assert_eq!(orders, [1, 2, 3]);

    let first_id = projects[0]["id"].as_i64().unwrap();
    let project = expect_json(
        get(app.clone(), &format!("/api/projects/{first_id}")).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(project, projects[0]);

    let testimonials = expect_json(get(app, "/api/testimonials").await, StatusCode::OK).await;
    assert_eq!(testimonials[0]["author"], "Sarah Jenkins");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn profile_round_trip(pool: PgPool) {
    let app = app_for(pool.clone());

    let created = expect_json(get(app.clone(), "/api/profile").await, StatusCode::OK).await;
    let updated = expect_json(
        put_json(app.clone(), "/api/profile", &json!({ "name": "Jane Doe" })).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["name"], "Jane Doe");
    assert_eq!(updated["summary"], created["summary"]);

    let rows: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM profiles")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows.0, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn contact_message_is_persisted(pool: PgPool) {
    let app = app_for(pool.clone());

    let json = expect_json(
        post_json(
            app,
            "/api/contact",
            &json!({ "name": "Jane", "email": "jane@x.com", "message": "Hi" }),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;

    let email: (String,) = sqlx::query_as("SELECT email FROM messages WHERE id = $1")
        .bind(json["id"].as_i64().unwrap())
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(email.0, "jane@x.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_project_returns_404(pool: PgPool) {
    let app = app_for(pool);
    let json = expect_json(get(app, "/api/projects/424242").await, StatusCode::NOT_FOUND).await;
    assert_eq!(json["message"], "Project not found");
}
