//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use lecturehub_core::types::LectureId;
use lecturehub_entity::user::UserRole;

/// Signup request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Display name.
    #[validate(length(min = 1, max = 100, message = "Username is required"))]
    pub username: String,
    /// Email address.
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    /// Phone number; formatting characters are allowed.
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone: String,
    /// Plaintext password; checked against the policy by the service.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Requested role.
    pub role: UserRole,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Access-token reissue request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReissueRequest {
    /// The (possibly expired) access token.
    pub access_token: String,
    /// A still-valid refresh token.
    pub refresh_token: String,
}

/// Lecture publication request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateLectureRequest {
    /// Lecture title.
    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,
    /// Price in the platform currency unit.
    #[validate(range(min = 0, message = "Price cannot be negative"))]
    pub price: i32,
    /// Fixed seat capacity.
    #[validate(range(min = 1, message = "A lecture needs at least one seat"))]
    pub max_participants: i32,
}

/// Batch enrollment request body: the lectures to enroll into, in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollRequest {
    /// Requested lectures, processed in this order.
    pub lecture_ids: Vec<LectureId>,
}

/// Query parameters for the lecture catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LectureListQuery {
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    pub page_size: Option<u64>,
    /// Sort order: `recent`, `popular`, or `rate`.
    pub sort: Option<String>,
}
