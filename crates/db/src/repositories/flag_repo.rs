//! Repository for the `content_flags` table: the flag record store.

use modboard_core::flag::STATUS_PENDING;
use modboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::flag::{FileFlagRequest, FlagRecord, FlagView};

/// Column list for content_flags queries.
const FLAG_COLUMNS: &str =
    "id, content_id, reporter_id, reason, status, created_at, resolved_at, resolved_by";

/// Provides flag lifecycle operations: create, pending listing, and the
/// atomic bulk resolution.
pub struct FlagRepo;

impl FlagRepo {
    /// Insert a new pending flag, returning the created row.
    ///
    /// No deduplication: the same reporter may flag the same content
    /// repeatedly and each report becomes a distinct record.
    pub async fn create(pool: &PgPool, input: &FileFlagRequest) -> Result<FlagRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO content_flags (content_id, reporter_id, reason, status)
             VALUES ($1, $2, $3, $4)
             RETURNING {FLAG_COLUMNS}"
        );
        sqlx::query_as::<_, FlagRecord>(&query)
            .bind(input.content_id)
            .bind(input.reporter_id)
            .bind(&input.reason)
            .bind(STATUS_PENDING)
            .fetch_one(pool)
            .await
    }

    /// List all flag records for a content item, newest first.
    pub async fn list_for_content(
        pool: &PgPool,
        content_id: DbId,
    ) -> Result<Vec<FlagRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {FLAG_COLUMNS} FROM content_flags
             WHERE content_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, FlagRecord>(&query)
            .bind(content_id)
            .fetch_all(pool)
            .await
    }

    /// The moderator review queue: one row per content item with pending
    /// flags, newest flag first.
    ///
    /// Each row carries the pending-flag count for the content item and the
    /// display data of the most recent flag (reporter, reason, timestamp),
    /// joined with the content snippet, author handle, and attachment-derived
    /// content type.
    pub async fn list_pending(pool: &PgPool) -> Result<Vec<FlagView>, sqlx::Error> {
        sqlx::query_as::<_, FlagView>(
            "SELECT q.* FROM (
                SELECT DISTINCT ON (f.content_id)
                    f.content_id,
                    CASE
                        WHEN ph.id IS NOT NULL THEN 'Photo'
                        WHEN v.id IS NOT NULL THEN 'Video'
                        ELSE 'Post'
                    END AS content_type,
                    COALESCE(p.caption, '') AS content,
                    au.username AS author,
                    ru.username AS reporter,
                    f.reason,
                    g.report_count,
                    f.created_at AS flagged_at,
                    f.status
                FROM content_flags f
                JOIN (
                    SELECT content_id, COUNT(*) AS report_count
                    FROM content_flags
                    WHERE status = $1
                    GROUP BY content_id
                ) g ON g.content_id = f.content_id
                JOIN posts p ON p.id = f.content_id
                JOIN users au ON au.id = p.user_id
                JOIN users ru ON ru.id = f.reporter_id
                LEFT JOIN photos ph ON ph.post_id = p.id
                LEFT JOIN videos v ON v.post_id = p.id
                WHERE f.status = $1
                ORDER BY f.content_id, f.created_at DESC, f.id DESC
            ) q
            ORDER BY q.flagged_at DESC",
        )
        .bind(STATUS_PENDING)
        .fetch_all(pool)
        .await
    }

    /// Count pending flags for a content item.
    pub async fn count_pending(pool: &PgPool, content_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM content_flags WHERE content_id = $1 AND status = $2",
        )
        .bind(content_id)
        .bind(STATUS_PENDING)
        .fetch_one(pool)
        .await
    }

    /// Transition every pending flag for a content item to `outcome` in a
    /// single conditional bulk update, stamping `resolved_at`/`resolved_by`.
    ///
    /// Returns the number of rows actually changed. Zero means another
    /// resolver won the race since the caller's pending check; callers treat
    /// that as a retryable conflict, not success.
    pub async fn resolve_pending(
        pool: &PgPool,
        content_id: DbId,
        outcome: &str,
        resolver_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE content_flags
             SET status = $2, resolved_at = NOW(), resolved_by = $3
             WHERE content_id = $1 AND status = $4",
        )
        .bind(content_id)
        .bind(outcome)
        .bind(resolver_id)
        .bind(STATUS_PENDING)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
