//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use lecturehub_core::types::UserId;

use super::role::UserRole;

/// A registered user: a student or an instructor.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Human-readable name.
    pub username: String,
    /// Email address (unique, used for login).
    pub email: String,
    /// Phone number, normalized to digits only (unique).
    pub phone: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Account role.
    pub role: UserRole,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Desired display name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Phone number, already digit-normalized.
    pub phone: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: UserRole,
}
