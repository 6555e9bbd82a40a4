//! Handlers for the `/predictions` resource.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use symptrack_core::profile::{parse_age, require_field};
use symptrack_core::risk::{classify, RiskAssessment};
use symptrack_core::stats::PREDICTION_HISTORY_LIMIT;
use symptrack_db::models::prediction::{CreatePrediction, PredictionSummary};
use symptrack_db::repositories::PredictionRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /predictions/predict`.
///
/// Only `symptoms` is required. The remaining fields are stored alongside the
/// result; `age` also feeds the score adjustment.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub symptoms: Option<String>,
    pub age: Option<Value>,
    pub gender: Option<String>,
    pub lifestyle: Option<String>,
    #[serde(rename = "medicalHistory", alias = "medical_history")]
    pub medical_history: Option<String>,
}

/// Response body for `GET /predictions/history`.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub predictions: Vec<PredictionSummary>,
}

/// POST /api/predictions/predict
///
/// Classify the symptom text, persist the run, and return the assessment.
pub async fn predict(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<PredictRequest>,
) -> AppResult<Json<RiskAssessment>> {
    let symptoms = require_field(input.symptoms.as_deref(), "symptoms")?;
    let age = parse_age(input.age.as_ref())?;

    let assessment = classify(symptoms, age);

    let prediction_result = serde_json::to_value(&assessment)
        .map_err(|e| AppError::InternalError(format!("Serializing assessment: {e}")))?;

    let create = CreatePrediction {
        user_id: auth.user_id,
        symptoms: symptoms.to_string(),
        additional_data: json!({
            "age": age,
            "gender": input.gender,
            "lifestyle": input.lifestyle,
            "medical_history": input.medical_history,
        }),
        prediction_result,
        risk_score: assessment.risk_score,
        risk_level: assessment.risk_level.as_str().to_string(),
    };

    let prediction = PredictionRepo::create(&state.pool, &create).await?;

    tracing::info!(
        user_id = auth.user_id,
        prediction_id = prediction.id,
        risk_score = assessment.risk_score,
        risk_level = %assessment.risk_level,
        "Prediction persisted"
    );

    Ok(Json(assessment))
}

/// GET /api/predictions/history
///
/// The caller's most recent predictions, newest first.
pub async fn history(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<HistoryResponse>> {
    let predictions =
        PredictionRepo::list_recent_for_user(&state.pool, auth.user_id, PREDICTION_HISTORY_LIMIT)
            .await?;

    Ok(Json(HistoryResponse { predictions }))
}
