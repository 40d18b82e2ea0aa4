//! Repository for the `posts` table: the content store collaborator.

use modboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::content::Post;

/// Column list for posts queries.
const POST_COLUMNS: &str = "id, user_id, caption, created_at";

/// Read and cascading-delete operations on content.
pub struct ContentRepo;

impl ContentRepo {
    /// Find a post by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {POST_COLUMNS} FROM posts WHERE id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a post and everything owned by it in one transaction:
    /// likes, comment likes, comments, flags, and attachment rows.
    ///
    /// Deleting a post with no flags (or one already gone) is not an error;
    /// the delete statements simply touch zero rows.
    pub async fn delete_cascade(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM post_likes WHERE post_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query(
            "DELETE FROM comment_likes
             WHERE comment_id IN (SELECT id FROM comments WHERE post_id = $1)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;
        sqlx::query("DELETE FROM comments WHERE post_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM content_flags WHERE content_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM photos WHERE post_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM videos WHERE post_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let deleted = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            post_id = id,
            deleted = deleted.rows_affected(),
            "Content cascade delete committed"
        );
        Ok(())
    }
}
