//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use symptrack_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserSummary`] or [`UserProfile`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub medical_history: Option<String>,
    pub lifestyle: Option<String>,
    pub emergency_contact: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Identity embedded in auth responses.
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: DbId,
    pub name: String,
    pub email: String,
}

/// Subset returned by `GET /auth/me`.
#[derive(Debug, Clone, Serialize)]
pub struct UserIdentity {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
}

/// Full editable profile returned by `GET /user/profile`.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub medical_history: Option<String>,
    pub lifestyle: Option<String>,
    pub emergency_contact: Option<String>,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

impl From<User> for UserIdentity {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            age: user.age,
            gender: user.gender,
        }
    }
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            name: user.name,
            email: user.email,
            phone: user.phone,
            age: user.age,
            gender: user.gender,
            medical_history: user.medical_history,
            lifestyle: user.lifestyle,
            emergency_contact: user.emergency_contact,
        }
    }
}

/// DTO for creating a new user at registration.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
}

/// DTO for replacing a user's profile. Every column is overwritten,
/// so `None` clears the stored value.
#[derive(Debug, Deserialize)]
pub struct UpdateProfile {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub medical_history: Option<String>,
    pub lifestyle: Option<String>,
    pub emergency_contact: Option<String>,
}
