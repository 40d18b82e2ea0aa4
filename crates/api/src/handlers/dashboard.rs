//! Handlers for dashboard aggregate statistics.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{Duration, Utc};

use modboard_core::stats::month_over_month_trend;
use modboard_db::models::stats::EntityStat;
use modboard_db::repositories::StatsRepo;

use crate::error::AppResult;
use crate::response::DashboardStatsResponse;
use crate::state::AppState;

/// GET /api/v1/dashboard/stats
///
/// Entity totals (users, posts, comments, logins) with month-over-month
/// trend percentages. The trend window is the last 30 days.
pub async fn get_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let cutoff = Utc::now() - Duration::days(30);
    let counts = StatsRepo::dashboard_counts(&state.pool, cutoff).await?;

    Ok(Json(DashboardStatsResponse {
        users: EntityStat {
            total: counts.users_total,
            trend: month_over_month_trend(counts.users_total, counts.users_prior),
        },
        posts: EntityStat {
            total: counts.posts_total,
            trend: month_over_month_trend(counts.posts_total, counts.posts_prior),
        },
        comments: EntityStat {
            total: counts.comments_total,
            trend: month_over_month_trend(counts.comments_total, counts.comments_prior),
        },
        logins: EntityStat {
            total: counts.logins_total,
            trend: month_over_month_trend(counts.logins_total, counts.logins_prior),
        },
    }))
}
