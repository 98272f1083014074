//! Response DTOs.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lecturehub_core::types::{EnrollmentId, LectureId, UserId};
use lecturehub_entity::enrollment::Enrollment;
use lecturehub_entity::lecture::Lecture;
use lecturehub_entity::user::User;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message text.
    pub message: String,
}

/// User summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: UserId,
    /// Display name.
    pub username: String,
    /// Email.
    pub email: String,
    /// Phone number (digits only).
    pub phone: String,
    /// Role.
    pub role: String,
    /// Registration time.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            phone: user.phone,
            role: user.role.to_string(),
            created_at: user.created_at,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Access token.
    pub access_token: String,
    /// Refresh token.
    pub refresh_token: String,
    /// Access token expiration.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration.
    pub refresh_expires_at: DateTime<Utc>,
    /// User info.
    pub user: UserResponse,
}

/// Lecture detail response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LectureResponse {
    /// Lecture ID.
    pub id: LectureId,
    /// Title.
    pub title: String,
    /// Price.
    pub price: i32,
    /// Committed enrollment count.
    pub current_participants: i32,
    /// Seat capacity.
    pub max_participants: i32,
    /// Remaining seats.
    pub remaining_seats: i32,
    /// Instructor user ID.
    pub instructor_id: UserId,
    /// Publication time.
    pub created_at: DateTime<Utc>,
}

impl From<Lecture> for LectureResponse {
    fn from(lecture: Lecture) -> Self {
        let remaining_seats = lecture.remaining_seats();
        Self {
            id: lecture.id,
            title: lecture.title,
            price: lecture.price,
            current_participants: lecture.current_participants,
            max_participants: lecture.max_participants,
            remaining_seats,
            instructor_id: lecture.instructor_id,
            created_at: lecture.created_at,
        }
    }
}

/// One committed enrollment record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentResponse {
    /// Enrollment ID.
    pub id: EnrollmentId,
    /// Lecture ID.
    pub lecture_id: LectureId,
    /// When the enrollment was committed.
    pub enrolled_at: DateTime<Utc>,
}

impl From<Enrollment> for EnrollmentResponse {
    fn from(enrollment: Enrollment) -> Self {
        Self {
            id: enrollment.id,
            lecture_id: enrollment.lecture_id,
            enrolled_at: enrollment.enrolled_at,
        }
    }
}

/// Batch enrollment report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEnrollResponse {
    /// `success`, `partial_success`, or `failure`.
    pub status: String,
    /// Per-item status messages keyed by lecture title (or raw id when the
    /// lecture could not be resolved).
    pub results: BTreeMap<String, String>,
}
