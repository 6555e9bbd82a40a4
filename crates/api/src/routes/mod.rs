pub mod alert;
pub mod auth;
pub mod dashboard;
pub mod health;
pub mod prediction;
pub mod user;
pub mod vlog;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                  register (public)
/// /auth/login                     login (public)
/// /auth/me                        current user
///
/// /predictions/predict            classify + persist (POST)
/// /predictions/history            last 10 predictions
///
/// /vlogs                          feed (?disease=), share (POST)
/// /vlogs/{id}/like                like (POST)
/// /vlogs/{id}/comments            list, add (POST)
///
/// /alerts                         community alert feed
///
/// /dashboard                      dashboard aggregate
///
/// /user/profile                   get, replace (PUT)
/// /user/health-stats              activity stats
/// ```
///
/// Everything except register and login requires a Bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/predictions", prediction::router())
        .nest("/vlogs", vlog::router())
        .nest("/alerts", alert::router())
        .nest("/dashboard", dashboard::router())
        .nest("/user", user::router())
}
