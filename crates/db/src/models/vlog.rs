//! Vlog and vlog comment models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use symptrack_core::types::{DbId, Timestamp};

/// A row from the `vlogs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vlog {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub disease: Option<String>,
    pub video_url: Option<String>,
    pub thumbnail: Option<String>,
    pub medicines: Option<String>,
    pub hospitals: Option<String>,
    pub recovery_timeline: Option<String>,
    pub likes: i32,
    pub comments: i32,
    pub created_at: Timestamp,
}

/// Vlog joined with its author's display name, as listed in the feed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VlogWithAuthor {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub disease: Option<String>,
    pub video_url: Option<String>,
    pub thumbnail: Option<String>,
    pub medicines: Option<String>,
    pub hospitals: Option<String>,
    pub recovery_timeline: Option<String>,
    pub likes: i32,
    pub comments: i32,
    pub created_at: Timestamp,
    pub author_name: String,
}

/// DTO for creating a vlog.
#[derive(Debug, Deserialize)]
pub struct CreateVlog {
    pub user_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub disease: Option<String>,
    pub video_url: Option<String>,
    pub thumbnail: Option<String>,
    pub medicines: Option<String>,
    pub hospitals: Option<String>,
    pub recovery_timeline: Option<String>,
}

/// A comment joined with its author's display name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VlogComment {
    pub id: DbId,
    pub vlog_id: DbId,
    pub user_id: DbId,
    pub comment_text: String,
    pub created_at: Timestamp,
    pub author_name: String,
}

/// DTO for adding a comment to a vlog.
#[derive(Debug, Deserialize)]
pub struct CreateVlogComment {
    pub vlog_id: DbId,
    pub user_id: DbId,
    pub comment_text: String,
}
