//! Lecture entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use lecturehub_core::types::{LectureId, UserId};

/// A lecture with a fixed seat capacity.
///
/// `current_participants` is the only mutable shared field; it is updated
/// exclusively inside an enrollment transaction holding the per-row lock.
/// Invariant: `0 <= current_participants <= max_participants`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Lecture {
    /// Unique lecture identifier.
    pub id: LectureId,
    /// Lecture title.
    pub title: String,
    /// Price in the platform's smallest currency unit.
    pub price: i32,
    /// Seat capacity; immutable after creation.
    pub max_participants: i32,
    /// Number of committed enrollments.
    pub current_participants: i32,
    /// The instructor who owns this lecture.
    pub instructor_id: UserId,
    /// When the lecture was created.
    pub created_at: DateTime<Utc>,
    /// When the lecture was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Lecture {
    /// Check whether every seat is taken.
    pub fn is_full(&self) -> bool {
        self.current_participants >= self.max_participants
    }

    /// Number of seats still open.
    pub fn remaining_seats(&self) -> i32 {
        (self.max_participants - self.current_participants).max(0)
    }
}

/// A catalog row: lecture fields joined with the instructor's name.
///
/// Read-only with respect to seat counts; the catalog never mutates
/// `current_participants`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LectureSummary {
    /// Lecture identifier.
    pub id: LectureId,
    /// Lecture title.
    pub title: String,
    /// Price.
    pub price: i32,
    /// Name of the owning instructor.
    pub instructor_name: String,
    /// Committed enrollment count.
    pub current_participants: i32,
    /// Seat capacity.
    pub max_participants: i32,
}

/// Data required to create a new lecture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLecture {
    /// Lecture title.
    pub title: String,
    /// Price (non-negative).
    pub price: i32,
    /// Seat capacity (at least 1).
    pub max_participants: i32,
    /// The creating instructor.
    pub instructor_id: UserId,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lecture(current: i32, max: i32) -> Lecture {
        Lecture {
            id: LectureId::new(),
            title: "Intro to Databases".to_string(),
            price: 30_000,
            max_participants: max,
            current_participants: current,
            instructor_id: UserId::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_is_full() {
        assert!(!lecture(9, 10).is_full());
        assert!(lecture(10, 10).is_full());
    }

    #[test]
    fn test_remaining_seats_never_negative() {
        assert_eq!(lecture(3, 10).remaining_seats(), 7);
        assert_eq!(lecture(10, 10).remaining_seats(), 0);
    }
}
