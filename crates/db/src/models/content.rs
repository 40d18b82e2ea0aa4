//! Content (post) models.

use modboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: DbId,
    pub user_id: DbId,
    pub caption: Option<String>,
    pub created_at: Timestamp,
}
