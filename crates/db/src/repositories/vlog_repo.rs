//! Repository for the `vlogs` table.

use sqlx::PgPool;
use symptrack_core::types::DbId;

use crate::models::vlog::{CreateVlog, Vlog, VlogWithAuthor};

const COLUMNS: &str = "id, user_id, title, description, disease, video_url, thumbnail, \
                       medicines, hospitals, recovery_timeline, likes, comments, created_at";

/// Provides feed reads, creation, and the atomic like counter for vlogs.
pub struct VlogRepo;

impl VlogRepo {
    /// Insert a new vlog with zeroed counters, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVlog) -> Result<Vlog, sqlx::Error> {
        let query = format!(
            "INSERT INTO vlogs
                (user_id, title, description, disease, video_url, thumbnail,
                 medicines, hospitals, recovery_timeline)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vlog>(&query)
            .bind(input.user_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.disease)
            .bind(&input.video_url)
            .bind(&input.thumbnail)
            .bind(&input.medicines)
            .bind(&input.hospitals)
            .bind(&input.recovery_timeline)
            .fetch_one(pool)
            .await
    }

    /// Find a vlog by ID.
    ///
    /// Not routed; used by maintenance scripts and tests.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Vlog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vlogs WHERE id = $1");
        sqlx::query_as::<_, Vlog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All vlogs joined with their author's name, newest first.
    ///
    /// When `disease` is given, only vlogs whose disease tag contains it
    /// (case-insensitively, as a literal substring) are returned.
    pub async fn list_with_author(
        pool: &PgPool,
        disease: Option<&str>,
    ) -> Result<Vec<VlogWithAuthor>, sqlx::Error> {
        sqlx::query_as::<_, VlogWithAuthor>(
            "SELECT v.id, v.title, v.description, v.disease, v.video_url, v.thumbnail,
                    v.medicines, v.hospitals, v.recovery_timeline, v.likes, v.comments,
                    v.created_at, u.name AS author_name
             FROM vlogs v
             JOIN users u ON v.user_id = u.id
             WHERE $1::TEXT IS NULL OR STRPOS(LOWER(v.disease), LOWER($1)) > 0
             ORDER BY v.created_at DESC, v.id DESC",
        )
        .bind(disease)
        .fetch_all(pool)
        .await
    }

    /// Atomically add one like. Returns the new count, or `None` if the
    /// vlog does not exist.
    pub async fn increment_likes(pool: &PgPool, id: DbId) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar::<_, i32>("UPDATE vlogs SET likes = likes + 1 WHERE id = $1 RETURNING likes")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
