//! Community alert model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use symptrack_core::alert::{AlertCategory, AlertSeverity};
use symptrack_core::types::{DbId, Timestamp};

/// A row from the `community_alerts` table.
///
/// `category` is exposed to clients as `type`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommunityAlert {
    pub id: DbId,
    #[serde(rename = "type")]
    pub category: String,
    pub title: String,
    pub description: Option<String>,
    pub severity: String,
    pub location: Option<String>,
    pub affected_count: Option<i32>,
    pub source: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for out-of-band alert insertion (feeds, seed scripts, tests).
#[derive(Debug, Deserialize)]
pub struct CreateCommunityAlert {
    pub category: AlertCategory,
    pub title: String,
    pub description: Option<String>,
    pub severity: AlertSeverity,
    pub location: Option<String>,
    pub affected_count: Option<i32>,
    pub source: Option<String>,
}
