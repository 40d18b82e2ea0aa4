//! HTTP-level integration tests for the `/dashboard/stats` endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, seed_post, seed_user};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: empty database yields zero totals and flat trends
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_stats_empty_database(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/dashboard/stats").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    for entity in ["users", "posts", "comments", "logins"] {
        assert_eq!(json[entity]["total"], 0, "{entity} total");
        assert_eq!(json[entity]["trend"], 0, "{entity} trend");
    }
}

// ---------------------------------------------------------------------------
// Test: totals count all rows and trends compare against 30 days ago
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_stats_totals_and_trend(pool: PgPool) {
    let old_user = seed_user(&pool, "old_user").await;
    let new_user = seed_user(&pool, "new_user").await;
    seed_post(&pool, new_user, "recent post").await;

    // One user predates the trend window: prior count 1, current 2 -> +100%.
    sqlx::query("UPDATE users SET created_at = NOW() - INTERVAL '60 days' WHERE id = $1")
        .bind(old_user)
        .execute(&pool)
        .await
        .unwrap();

    let app = build_test_app(pool);
    let response = get(app, "/api/v1/dashboard/stats").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["users"]["total"], 2);
    assert_eq!(json["users"]["trend"], 100);
    assert_eq!(json["posts"]["total"], 1);
    // No posts existed a month ago, so the trend is pinned to zero.
    assert_eq!(json["posts"]["trend"], 0);
    assert_eq!(json["comments"]["total"], 0);
    assert_eq!(json["logins"]["total"], 0);
}
