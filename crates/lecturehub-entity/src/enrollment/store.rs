//! Storage-collaborator traits for the enrollment admission core.
//!
//! The core never talks to a database directly; it drives an
//! [`EnrollmentStore`] that opens transactions and an [`EnrollmentTx`] that
//! performs the reserve-check-write sequence under an exclusive per-lecture
//! hold. Implementations live in `lecturehub-database` (PostgreSQL and
//! in-memory).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use lecturehub_core::result::AppResult;
use lecturehub_core::types::{LectureId, UserId};

use super::model::Enrollment;

/// The lecture row as seen under the exclusive hold.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct LectureSeat {
    /// Lecture identifier.
    pub id: LectureId,
    /// Lecture title, used to key the batch report.
    pub title: String,
    /// Committed enrollment count at the time of the hold.
    pub current_participants: i32,
    /// Fixed seat capacity.
    pub max_participants: i32,
}

impl LectureSeat {
    /// Whether every seat is taken.
    pub fn is_full(&self) -> bool {
        self.current_participants >= self.max_participants
    }
}

/// Opens enrollment transactions.
#[async_trait]
pub trait EnrollmentStore: Send + Sync + std::fmt::Debug {
    /// Begin a transaction scoped to one enrollment attempt.
    async fn begin(&self) -> AppResult<Box<dyn EnrollmentTx>>;
}

/// One in-flight enrollment transaction.
///
/// All methods operate within the same transaction boundary; the hold taken
/// by [`lock_lecture`](Self::lock_lecture) is released at `commit`/`rollback`.
/// Dropping an uncommitted transaction must roll back every staged change.
#[async_trait]
pub trait EnrollmentTx: Send {
    /// Load the lecture row under an exclusive hold (pessimistic read).
    ///
    /// Returns `None` when no lecture with that id exists. Fails with
    /// `ErrorKind::Timeout` when the hold cannot be acquired within the
    /// configured bound.
    async fn lock_lecture(&mut self, lecture_id: LectureId) -> AppResult<Option<LectureSeat>>;

    /// Increment the lecture's seat count by one.
    ///
    /// Only valid while the hold from `lock_lecture` is live, and only after
    /// the caller verified the lecture is not full.
    async fn reserve_seat(&mut self, lecture_id: LectureId) -> AppResult<()>;

    /// Duplicate Guard: whether the student already holds an enrollment for
    /// this lecture.
    async fn is_enrolled(&mut self, lecture_id: LectureId, student_id: UserId) -> AppResult<bool>;

    /// Write a new enrollment record.
    async fn insert_enrollment(
        &mut self,
        lecture_id: LectureId,
        student_id: UserId,
    ) -> AppResult<Enrollment>;

    /// Commit: seat increment and enrollment record become visible
    /// atomically.
    async fn commit(self: Box<Self>) -> AppResult<()>;

    /// Roll back every staged change.
    async fn rollback(self: Box<Self>) -> AppResult<()>;
}
