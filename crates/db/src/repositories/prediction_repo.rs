//! Repository for the `predictions` table.

use sqlx::PgPool;
use symptrack_core::types::DbId;

use crate::models::prediction::{CreatePrediction, Prediction, PredictionSummary};

const COLUMNS: &str = "id, user_id, symptoms, additional_data, prediction_result, \
                       risk_score, risk_level, created_at";

/// Provides insert and history reads for classifier runs.
pub struct PredictionRepo;

impl PredictionRepo {
    /// Persist a classifier run, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePrediction,
    ) -> Result<Prediction, sqlx::Error> {
        let query = format!(
            "INSERT INTO predictions
                (user_id, symptoms, additional_data, prediction_result, risk_score, risk_level)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prediction>(&query)
            .bind(input.user_id)
            .bind(&input.symptoms)
            .bind(&input.additional_data)
            .bind(&input.prediction_result)
            .bind(input.risk_score)
            .bind(&input.risk_level)
            .fetch_one(pool)
            .await
    }

    /// The `limit` most recent predictions for a user, newest first.
    pub async fn list_recent_for_user(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<PredictionSummary>, sqlx::Error> {
        sqlx::query_as::<_, PredictionSummary>(
            "SELECT symptoms, risk_score, risk_level, created_at
             FROM predictions
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
