//! Repository for the `vlog_comments` table.

use sqlx::PgPool;
use symptrack_core::types::DbId;

use crate::models::vlog::{CreateVlogComment, VlogComment};

/// Provides comment creation (with counter maintenance) and listing.
pub struct VlogCommentRepo;

impl VlogCommentRepo {
    /// Add a comment and bump the parent vlog's `comments` counter in one
    /// transaction.
    ///
    /// Returns `None` (and writes nothing) if the vlog does not exist.
    pub async fn create(
        pool: &PgPool,
        input: &CreateVlogComment,
    ) -> Result<Option<VlogComment>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let bumped = sqlx::query_scalar::<_, DbId>(
            "UPDATE vlogs SET comments = comments + 1 WHERE id = $1 RETURNING id",
        )
        .bind(input.vlog_id)
        .fetch_optional(&mut *tx)
        .await?;

        if bumped.is_none() {
            tx.rollback().await?;
            return Ok(None);
        }

        let comment = sqlx::query_as::<_, VlogComment>(
            "WITH inserted AS (
                INSERT INTO vlog_comments (vlog_id, user_id, comment_text)
                VALUES ($1, $2, $3)
                RETURNING id, vlog_id, user_id, comment_text, created_at
             )
             SELECT i.id, i.vlog_id, i.user_id, i.comment_text, i.created_at,
                    u.name AS author_name
             FROM inserted i
             JOIN users u ON u.id = i.user_id",
        )
        .bind(input.vlog_id)
        .bind(input.user_id)
        .bind(&input.comment_text)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(comment))
    }

    /// Comments on a vlog, oldest first.
    pub async fn list_for_vlog(
        pool: &PgPool,
        vlog_id: DbId,
    ) -> Result<Vec<VlogComment>, sqlx::Error> {
        sqlx::query_as::<_, VlogComment>(
            "SELECT c.id, c.vlog_id, c.user_id, c.comment_text, c.created_at,
                    u.name AS author_name
             FROM vlog_comments c
             JOIN users u ON u.id = c.user_id
             WHERE c.vlog_id = $1
             ORDER BY c.created_at ASC, c.id ASC",
        )
        .bind(vlog_id)
        .fetch_all(pool)
        .await
    }
}
