//! Handlers for the `/vlogs` resource: feed, sharing, likes, and comments.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use symptrack_core::error::CoreError;
use symptrack_core::profile::require_field;
use symptrack_core::types::DbId;
use symptrack_db::models::vlog::{CreateVlog, CreateVlogComment, Vlog, VlogComment, VlogWithAuthor};
use symptrack_db::repositories::{VlogCommentRepo, VlogRepo};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::query::VlogFilterParams;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /vlogs`.
#[derive(Debug, Deserialize)]
pub struct CreateVlogRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub disease: Option<String>,
    pub video_url: Option<String>,
    pub thumbnail: Option<String>,
    pub medicines: Option<String>,
    pub hospitals: Option<String>,
    pub recovery_timeline: Option<String>,
}

/// Request body for `POST /vlogs/{id}/comments`.
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub comment_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VlogsResponse {
    pub vlogs: Vec<VlogWithAuthor>,
}

#[derive(Debug, Serialize)]
pub struct VlogCreatedResponse {
    pub message: &'static str,
    pub vlog: Vlog,
}

/// Response for `POST /vlogs/{id}/like`. `likes` is `null` for unknown ids.
#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub message: &'static str,
    pub likes: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct CommentsResponse {
    pub comments: Vec<VlogComment>,
}

#[derive(Debug, Serialize)]
pub struct CommentCreatedResponse {
    pub message: &'static str,
    pub comment: VlogComment,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/vlogs?disease=
///
/// The vlog feed, newest first, optionally filtered by disease substring.
pub async fn list_vlogs(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<VlogFilterParams>,
) -> AppResult<Json<VlogsResponse>> {
    let vlogs = VlogRepo::list_with_author(&state.pool, params.disease()).await?;
    Ok(Json(VlogsResponse { vlogs }))
}

/// POST /api/vlogs
pub async fn create_vlog(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateVlogRequest>,
) -> AppResult<(StatusCode, Json<VlogCreatedResponse>)> {
    let title = require_field(input.title.as_deref(), "title")?;

    let create = CreateVlog {
        user_id: auth.user_id,
        title: title.to_string(),
        description: input.description,
        disease: input.disease,
        video_url: input.video_url,
        thumbnail: input.thumbnail,
        medicines: input.medicines,
        hospitals: input.hospitals,
        recovery_timeline: input.recovery_timeline,
    };

    let vlog = VlogRepo::create(&state.pool, &create).await?;

    tracing::info!(user_id = auth.user_id, vlog_id = vlog.id, "Vlog created");

    Ok((
        StatusCode::CREATED,
        Json(VlogCreatedResponse {
            message: "Vlog shared successfully",
            vlog,
        }),
    ))
}

/// POST /api/vlogs/{id}/like
///
/// Atomically increments the like counter. Unknown ids are not an error.
pub async fn like_vlog(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(vlog_id): Path<DbId>,
) -> AppResult<Json<LikeResponse>> {
    let likes = VlogRepo::increment_likes(&state.pool, vlog_id).await?;

    if likes.is_none() {
        tracing::debug!(vlog_id, "Like on unknown vlog");
    }

    Ok(Json(LikeResponse {
        message: "Vlog liked",
        likes,
    }))
}

/// GET /api/vlogs/{id}/comments
pub async fn list_comments(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(vlog_id): Path<DbId>,
) -> AppResult<Json<CommentsResponse>> {
    let comments = VlogCommentRepo::list_for_vlog(&state.pool, vlog_id).await?;
    Ok(Json(CommentsResponse { comments }))
}

/// POST /api/vlogs/{id}/comments
///
/// Adds a comment and bumps the vlog's comment counter in one transaction.
pub async fn add_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(vlog_id): Path<DbId>,
    AppJson(input): AppJson<CreateCommentRequest>,
) -> AppResult<(StatusCode, Json<CommentCreatedResponse>)> {
    let comment_text = require_field(input.comment_text.as_deref(), "comment_text")?;

    let create = CreateVlogComment {
        vlog_id,
        user_id: auth.user_id,
        comment_text: comment_text.to_string(),
    };

    let comment = VlogCommentRepo::create(&state.pool, &create)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vlog",
            id: vlog_id,
        }))?;

    tracing::info!(
        user_id = auth.user_id,
        vlog_id,
        comment_id = comment.id,
        "Comment added"
    );

    Ok((
        StatusCode::CREATED,
        Json(CommentCreatedResponse {
            message: "Comment added",
            comment,
        }),
    ))
}
