//! Enrollment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use lecturehub_core::types::{EnrollmentId, LectureId, UserId};

/// A committed enrollment of one student in one lecture.
///
/// Created only by a successful enrollment transaction; never mutated.
/// At most one enrollment exists per (lecture, student) pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Enrollment {
    /// Unique enrollment identifier, generated on commit.
    pub id: EnrollmentId,
    /// The lecture enrolled in.
    pub lecture_id: LectureId,
    /// The enrolled student.
    pub student_id: UserId,
    /// When the enrollment was committed.
    pub enrolled_at: DateTime<Utc>,
}
