//! Response payload types for API handlers.
//!
//! The admin dashboard client consumes these shapes directly, so field
//! names serialize as camelCase.

use modboard_db::models::flag::FlagView;
use modboard_db::models::stats::EntityStat;
use serde::Serialize;

/// Response body for `GET /moderation`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlaggedContentResponse {
    pub flagged_content: Vec<FlagView>,
}

/// Response body for `PATCH /moderation/{content_id}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveFlagsResponse {
    pub success: bool,
    pub updated_count: u64,
}

/// Generic `{ "success": true }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Response body for `GET /dashboard/stats`.
#[derive(Debug, Serialize)]
pub struct DashboardStatsResponse {
    pub users: EntityStat,
    pub posts: EntityStat,
    pub comments: EntityStat,
    pub logins: EntityStat,
}
