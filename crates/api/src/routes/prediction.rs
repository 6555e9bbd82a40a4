//! Route definitions for the `/predictions` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::prediction;
use crate::state::AppState;

/// Routes mounted at `/predictions`.
///
/// ```text
/// POST /predict  -> predict
/// GET  /history  -> history
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/predict", post(prediction::predict))
        .route("/history", get(prediction::history))
}
