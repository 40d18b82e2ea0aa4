//! Repository-level tests for dashboard aggregate counts.

use chrono::{Duration, Utc};
use modboard_db::repositories::StatsRepo;
use sqlx::PgPool;

async fn seed_user(pool: &PgPool, username: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO users (username, email) VALUES ($1, $2) RETURNING id")
        .bind(username)
        .bind(format!("{username}@example.com"))
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_counts_empty_database(pool: PgPool) {
    let cutoff = Utc::now() - Duration::days(30);
    let counts = StatsRepo::dashboard_counts(&pool, cutoff).await.unwrap();

    assert_eq!(counts.users_total, 0);
    assert_eq!(counts.posts_total, 0);
    assert_eq!(counts.comments_total, 0);
    assert_eq!(counts.logins_total, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_prior_counts_respect_cutoff(pool: PgPool) {
    let old_user = seed_user(&pool, "old_user").await;
    seed_user(&pool, "new_user").await;

    // Backdate one user past the cutoff and give both a login, one old.
    sqlx::query("UPDATE users SET created_at = NOW() - INTERVAL '60 days' WHERE id = $1")
        .bind(old_user)
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query(
        "INSERT INTO logins (user_id, login_time) VALUES ($1, NOW() - INTERVAL '45 days'), ($1, NOW())",
    )
    .bind(old_user)
    .execute(&pool)
    .await
    .unwrap();

    let cutoff = Utc::now() - Duration::days(30);
    let counts = StatsRepo::dashboard_counts(&pool, cutoff).await.unwrap();

    assert_eq!(counts.users_total, 2);
    assert_eq!(counts.users_prior, 1);
    assert_eq!(counts.logins_total, 2);
    assert_eq!(counts.logins_prior, 1);
}
