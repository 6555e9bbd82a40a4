//! Handlers for the `/auth` resource (register, login, me).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use symptrack_core::error::CoreError;
use symptrack_core::profile::{parse_age, parse_gender, parse_phone, require_field};
use symptrack_db::models::user::{CreateUser, User, UserIdentity, UserSummary};
use symptrack_db::repositories::UserRepo;

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{map_email_conflict, AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    /// Accepted as a string or a bare number.
    pub phone: Option<Value>,
    /// Accepted as a number or a numeric string.
    pub age: Option<Value>,
    pub gender: Option<String>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Successful authentication response returned by register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: &'static str,
    pub token: String,
    pub user: UserSummary,
}

/// Response body for `GET /auth/me`.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: UserIdentity,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/register
///
/// Create an account and return a session token. Email uniqueness is
/// enforced by the `uq_users_email` constraint.
pub async fn register(
    State(state): State<AppState>,
    AppJson(input): AppJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let name = require_field(input.name.as_deref(), "name")?;
    let email = require_field(input.email.as_deref(), "email")?;
    let password = require_field(input.password.as_deref(), "password")?;
    let gender = parse_gender(input.gender.as_deref())?;
    let age = parse_age(input.age.as_ref())?;
    let phone = parse_phone(input.phone.as_ref())?;

    let password_hash = hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateUser {
        name: name.to_string(),
        email: email.to_string(),
        password_hash,
        phone,
        age,
        gender: gender.map(|g| g.as_str().to_string()),
    };

    let user = UserRepo::create(&state.pool, &create)
        .await
        .map_err(|e| map_email_conflict(e, email))?;

    tracing::info!(user_id = user.id, "User registered");

    let response = auth_response(&state, &user, "User registered successfully")?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/auth/login
///
/// Authenticate with email + password. Unknown emails and wrong passwords
/// are indistinguishable to the caller.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let email = require_field(input.email.as_deref(), "email")?;
    let password = require_field(input.password.as_deref(), "password")?;

    let user = UserRepo::find_by_email(&state.pool, email)
        .await?
        .ok_or(AppError::Core(CoreError::InvalidCredentials))?;

    let password_valid = verify_password(password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::debug!(user_id = user.id, "Login rejected: wrong password");
        return Err(AppError::Core(CoreError::InvalidCredentials));
    }

    let response = auth_response(&state, &user, "Login successful")?;
    Ok(Json(response))
}

/// GET /api/auth/me
///
/// Return the authenticated user's identity.
pub async fn me(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<MeResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;

    Ok(Json(MeResponse { user: user.into() }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Sign a session token for `user` and wrap it in an [`AuthResponse`].
fn auth_response(state: &AppState, user: &User, message: &'static str) -> AppResult<AuthResponse> {
    let token = generate_token(user.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(AuthResponse {
        message,
        token,
        user: UserSummary::from(user),
    })
}
