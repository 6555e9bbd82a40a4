//! Route definitions for the `/vlogs` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::vlog;
use crate::state::AppState;

/// Routes mounted at `/vlogs`.
///
/// ```text
/// GET  /                -> list_vlogs (?disease=)
/// POST /                -> create_vlog
/// POST /{id}/like       -> like_vlog
/// GET  /{id}/comments   -> list_comments
/// POST /{id}/comments   -> add_comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(vlog::list_vlogs).post(vlog::create_vlog))
        .route("/{id}/like", post(vlog::like_vlog))
        .route(
            "/{id}/comments",
            get(vlog::list_comments).post(vlog::add_comment),
        )
}
