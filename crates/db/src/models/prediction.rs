//! Prediction entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use symptrack_core::types::{DbId, Timestamp};

/// A row from the `predictions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Prediction {
    pub id: DbId,
    pub user_id: DbId,
    pub symptoms: String,
    /// Extra classifier inputs (`age`, `gender`, `lifestyle`, `medical_history`).
    pub additional_data: serde_json::Value,
    /// The serialized classifier output.
    pub prediction_result: serde_json::Value,
    pub risk_score: i32,
    pub risk_level: String,
    pub created_at: Timestamp,
}

/// History entry returned by `GET /predictions/history`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PredictionSummary {
    pub symptoms: String,
    pub risk_score: i32,
    pub risk_level: String,
    pub created_at: Timestamp,
}

/// One day of a user's risk trend.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RiskTrendPoint {
    /// UTC calendar day.
    pub day: NaiveDate,
    pub average_risk_score: f64,
    pub predictions: i64,
}

/// DTO for persisting a classifier run.
#[derive(Debug, Deserialize)]
pub struct CreatePrediction {
    pub user_id: DbId,
    pub symptoms: String,
    pub additional_data: serde_json::Value,
    pub prediction_result: serde_json::Value,
    pub risk_score: i32,
    pub risk_level: String,
}
