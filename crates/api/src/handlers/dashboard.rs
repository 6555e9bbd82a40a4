//! Handler for the dashboard aggregate.
//!
//! Combines the caller's risk average, recent predictions, a daily risk
//! trend, and the community alert feed into one payload.

use axum::extract::State;
use axum::Json;
use chrono::{Duration, Utc};
use serde::Serialize;
use symptrack_core::alert::RECENT_ALERT_WINDOW_DAYS;
use symptrack_core::stats::{
    truncate_average, DASHBOARD_RECENT_LIMIT, DEFAULT_DASHBOARD_RISK_SCORE,
    HEALTH_TREND_WINDOW_DAYS,
};
use symptrack_db::models::alert::CommunityAlert;
use symptrack_db::models::prediction::{PredictionSummary, RiskTrendPoint};
use symptrack_db::repositories::{AlertRepo, PredictionRepo, StatsRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Response body for `GET /dashboard`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    /// Truncated mean risk score, or the default when there are no predictions.
    pub risk_score: i32,
    pub recent_predictions: Vec<PredictionSummary>,
    pub health_trends: Vec<RiskTrendPoint>,
    pub community_alerts: Vec<CommunityAlert>,
    pub prediction_count: i64,
    /// Alerts created within the recent-alert window.
    pub alerts_count: i64,
}

/// GET /api/dashboard
pub async fn get_dashboard(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DashboardResponse>> {
    let pool = &state.pool;
    let now = Utc::now();

    let average = StatsRepo::average_risk_score(pool, auth.user_id).await?;
    let prediction_count = StatsRepo::prediction_count(pool, auth.user_id).await?;
    let recent_predictions =
        PredictionRepo::list_recent_for_user(pool, auth.user_id, DASHBOARD_RECENT_LIMIT).await?;
    let health_trends = StatsRepo::daily_risk_trend(
        pool,
        auth.user_id,
        now - Duration::days(HEALTH_TREND_WINDOW_DAYS),
    )
    .await?;
    let community_alerts = AlertRepo::list_recent(pool, DASHBOARD_RECENT_LIMIT).await?;
    let alerts_count =
        AlertRepo::count_since(pool, now - Duration::days(RECENT_ALERT_WINDOW_DAYS)).await?;

    Ok(Json(DashboardResponse {
        risk_score: truncate_average(average, DEFAULT_DASHBOARD_RISK_SCORE),
        recent_predictions,
        health_trends,
        community_alerts,
        prediction_count,
        alerts_count,
    }))
}
