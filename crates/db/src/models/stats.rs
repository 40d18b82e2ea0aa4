//! Dashboard statistics models.

use serde::Serialize;
use sqlx::FromRow;

/// Raw entity counts for the dashboard, fetched in one query.
///
/// `*_prior` counts only rows created before the trend cutoff (one month
/// ago), which the API layer turns into month-over-month percentages.
#[derive(Debug, Clone, FromRow)]
pub struct DashboardCounts {
    pub users_total: i64,
    pub users_prior: i64,
    pub posts_total: i64,
    pub posts_prior: i64,
    pub comments_total: i64,
    pub comments_prior: i64,
    pub logins_total: i64,
    pub logins_prior: i64,
}

/// One dashboard stat card: a total plus its trend percentage.
#[derive(Debug, Clone, Serialize)]
pub struct EntityStat {
    pub total: i64,
    pub trend: i64,
}
