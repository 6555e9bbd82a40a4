//! Route definitions for the `/user` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/user`.
///
/// ```text
/// GET  /profile       -> get_profile
/// PUT  /profile       -> update_profile
/// GET  /health-stats  -> health_stats
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(user::get_profile).put(user::update_profile))
        .route("/health-stats", get(user::health_stats))
}
