//! Handlers for the `/user` resource: profile and health statistics.

use axum::extract::State;
use axum::Json;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use symptrack_core::error::CoreError;
use symptrack_core::profile::{parse_age, parse_gender, parse_phone, require_field};
use symptrack_core::stats::{truncate_average, COMMUNITY_SCORE_RANGE, DEFAULT_STATS_RISK_SCORE};
use symptrack_db::models::user::{UpdateProfile, UserProfile};
use symptrack_db::repositories::{StatsRepo, UserRepo};

use crate::error::{map_email_conflict, AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `PUT /user/profile`. The stored profile is replaced
/// wholesale; omitted optional fields are cleared.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Value>,
    pub age: Option<Value>,
    pub gender: Option<String>,
    pub medical_history: Option<String>,
    pub lifestyle: Option<String>,
    pub emergency_contact: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Per-user activity numbers.
#[derive(Debug, Serialize)]
pub struct HealthStats {
    pub predictions_made: i64,
    pub avg_risk_score: i32,
    pub vlogs_shared: i64,
    /// Placeholder engagement score, random within a fixed range.
    pub community_score: i32,
}

#[derive(Debug, Serialize)]
pub struct HealthStatsResponse {
    pub stats: HealthStats,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/user/profile
pub async fn get_profile(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<ProfileResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;

    Ok(Json(ProfileResponse {
        profile: user.into(),
    }))
}

/// PUT /api/user/profile
pub async fn update_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<UpdateProfileRequest>,
) -> AppResult<Json<MessageResponse>> {
    let name = require_field(input.name.as_deref(), "name")?;
    let email = require_field(input.email.as_deref(), "email")?;
    let gender = parse_gender(input.gender.as_deref())?;
    let age = parse_age(input.age.as_ref())?;
    let phone = parse_phone(input.phone.as_ref())?;

    let update = UpdateProfile {
        name: name.to_string(),
        email: email.to_string(),
        phone,
        age,
        gender: gender.map(|g| g.as_str().to_string()),
        medical_history: input.medical_history,
        lifestyle: input.lifestyle,
        emergency_contact: input.emergency_contact,
    };

    UserRepo::update_profile(&state.pool, auth.user_id, &update)
        .await
        .map_err(|e| map_email_conflict(e, email))?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;

    tracing::info!(user_id = auth.user_id, "Profile updated");

    Ok(Json(MessageResponse {
        message: "Profile updated successfully",
    }))
}

/// GET /api/user/health-stats
pub async fn health_stats(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<HealthStatsResponse>> {
    let predictions_made = StatsRepo::prediction_count(&state.pool, auth.user_id).await?;
    let average = StatsRepo::average_risk_score(&state.pool, auth.user_id).await?;
    let vlogs_shared = StatsRepo::vlog_count(&state.pool, auth.user_id).await?;

    let community_score = rand::rng().random_range(COMMUNITY_SCORE_RANGE);

    Ok(Json(HealthStatsResponse {
        stats: HealthStats {
            predictions_made,
            avg_risk_score: truncate_average(average, DEFAULT_STATS_RISK_SCORE),
            vlogs_shared,
            community_score,
        },
    }))
}
