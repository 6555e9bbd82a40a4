//! Aggregate reads backing the dashboard and health-stats endpoints.

use sqlx::PgPool;
use symptrack_core::types::{DbId, Timestamp};

use crate::models::prediction::RiskTrendPoint;

/// Read-only aggregates over predictions and vlogs.
pub struct StatsRepo;

impl StatsRepo {
    /// Mean risk score across a user's predictions, `None` if they have none.
    pub async fn average_risk_score(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<f64>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<f64>>(
            "SELECT AVG(risk_score)::FLOAT8 FROM predictions WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// Number of predictions a user has made.
    pub async fn prediction_count(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM predictions WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Number of vlogs a user has shared.
    pub async fn vlog_count(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM vlogs WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Per-day average risk and prediction count since `since`, oldest day first.
    ///
    /// Days without predictions are omitted.
    pub async fn daily_risk_trend(
        pool: &PgPool,
        user_id: DbId,
        since: Timestamp,
    ) -> Result<Vec<RiskTrendPoint>, sqlx::Error> {
        sqlx::query_as::<_, RiskTrendPoint>(
            "SELECT (created_at AT TIME ZONE 'UTC')::DATE AS day,
                    AVG(risk_score)::FLOAT8 AS average_risk_score,
                    COUNT(*) AS predictions
             FROM predictions
             WHERE user_id = $1 AND created_at >= $2
             GROUP BY day
             ORDER BY day",
        )
        .bind(user_id)
        .bind(since)
        .fetch_all(pool)
        .await
    }
}
