//! Content flag models and moderation request DTOs.

use modboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `content_flags` table.
///
/// `resolved_at` and `resolved_by` are set if and only if the status has
/// left `pending`; the store enforces this with a CHECK constraint.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagRecord {
    pub id: DbId,
    pub content_id: DbId,
    pub reporter_id: DbId,
    pub reason: String,
    pub status: String,
    pub created_at: Timestamp,
    pub resolved_at: Option<Timestamp>,
    pub resolved_by: Option<DbId>,
}

/// Request body for filing a flag (`POST /moderation`).
///
/// The reporter identity is an explicit required parameter, never an
/// implicit default.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileFlagRequest {
    pub content_id: DbId,
    pub reporter_id: DbId,
    pub reason: String,
}

/// Request body for resolving the pending flags of a content item
/// (`PATCH /moderation/{content_id}`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveFlagsRequest {
    /// Terminal outcome: `resolved` or `dismissed`.
    pub status: String,
    pub resolver_id: DbId,
}

/// A moderator-facing view of one flagged content item.
///
/// One row per content id, not per flag: `report_count` counts the pending
/// flags, while `reason`, `reporter`, and `flagged_at` come from the most
/// recent one.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagView {
    pub content_id: DbId,
    /// `Photo`, `Video`, or `Post`, inferred from the attachment tables.
    pub content_type: String,
    /// Caption snippet; empty string when the post has no caption.
    pub content: String,
    /// Username of the content author.
    pub author: String,
    /// Username of the most recent reporter.
    pub reporter: String,
    /// Reason given by the most recent reporter.
    pub reason: String,
    pub report_count: i64,
    /// Timestamp of the most recent pending flag.
    pub flagged_at: Timestamp,
    pub status: String,
}
