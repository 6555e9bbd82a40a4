//! Liveness probe for load balancers and container orchestrators.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when PostgreSQL answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

/// GET /health
///
/// Always answers 200 so the process counts as alive; a lost database shows
/// up as `degraded` rather than an error status.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match symptrack_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the database");
            false
        }
    };

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Mounted at the root, outside `/api`, and needs no token.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
