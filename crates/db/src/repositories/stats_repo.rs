//! Repository for dashboard aggregate counts.

use modboard_core::types::Timestamp;
use sqlx::PgPool;

use crate::models::stats::DashboardCounts;

/// Aggregate count queries backing the dashboard stat cards.
pub struct StatsRepo;

impl StatsRepo {
    /// Fetch entity totals plus the counts as of `cutoff`, in one query.
    ///
    /// The prior counts restrict to rows created before the cutoff so the
    /// API layer can compute month-over-month trends.
    pub async fn dashboard_counts(
        pool: &PgPool,
        cutoff: Timestamp,
    ) -> Result<DashboardCounts, sqlx::Error> {
        sqlx::query_as::<_, DashboardCounts>(
            "SELECT
                (SELECT COUNT(*) FROM users) AS users_total,
                (SELECT COUNT(*) FROM users WHERE created_at < $1) AS users_prior,
                (SELECT COUNT(*) FROM posts) AS posts_total,
                (SELECT COUNT(*) FROM posts WHERE created_at < $1) AS posts_prior,
                (SELECT COUNT(*) FROM comments) AS comments_total,
                (SELECT COUNT(*) FROM comments WHERE created_at < $1) AS comments_prior,
                (SELECT COUNT(*) FROM logins) AS logins_total,
                (SELECT COUNT(*) FROM logins WHERE login_time < $1) AS logins_prior",
        )
        .bind(cutoff)
        .fetch_one(pool)
        .await
    }
}
