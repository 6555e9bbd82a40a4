//! Repository for the `community_alerts` table.

use sqlx::PgPool;
use symptrack_core::types::Timestamp;

use crate::models::alert::{CommunityAlert, CreateCommunityAlert};

const COLUMNS: &str = "id, category, title, description, severity, location, \
                       affected_count, source, created_at";

/// Alert reads for the API plus an insert used by out-of-band feeds.
pub struct AlertRepo;

impl AlertRepo {
    /// Insert an alert. Not exposed over HTTP.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCommunityAlert,
    ) -> Result<CommunityAlert, sqlx::Error> {
        let query = format!(
            "INSERT INTO community_alerts
                (category, title, description, severity, location, affected_count, source)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CommunityAlert>(&query)
            .bind(input.category.as_str())
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.severity.as_str())
            .bind(&input.location)
            .bind(input.affected_count)
            .bind(&input.source)
            .fetch_one(pool)
            .await
    }

    /// The `limit` most recent alerts, newest first.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<CommunityAlert>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM community_alerts
             ORDER BY created_at DESC, id DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, CommunityAlert>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Number of alerts created at or after `since`.
    pub async fn count_since(pool: &PgPool, since: Timestamp) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM community_alerts WHERE created_at >= $1")
            .bind(since)
            .fetch_one(pool)
            .await
    }
}
