//! Handler for the community alert feed.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use symptrack_core::alert::ALERT_FEED_LIMIT;
use symptrack_db::models::alert::CommunityAlert;
use symptrack_db::repositories::AlertRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AlertsResponse {
    pub alerts: Vec<CommunityAlert>,
}

/// GET /api/alerts
pub async fn list_alerts(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<AlertsResponse>> {
    let alerts = AlertRepo::list_recent(&state.pool, ALERT_FEED_LIMIT).await?;
    Ok(Json(AlertsResponse { alerts }))
}
