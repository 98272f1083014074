//! In-memory enrollment store for single-node use and tests.
//!
//! Mirrors the PostgreSQL store's contract: admissions to the same lecture
//! serialize on a per-lecture Tokio mutex, admissions to different lectures
//! proceed in parallel, and writes are staged until commit so a rollback
//! (or a dropped transaction) leaves no trace.

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::{Mutex, OwnedMutexGuard};

use lecturehub_core::error::AppError;
use lecturehub_core::result::AppResult;
use lecturehub_core::types::{EnrollmentId, LectureId, UserId};
use lecturehub_entity::enrollment::{Enrollment, EnrollmentStore, EnrollmentTx, LectureSeat};

/// One lecture's seat state. The surrounding mutex is the per-lecture
/// exclusive hold.
#[derive(Debug)]
struct SeatRow {
    title: String,
    current_participants: i32,
    max_participants: i32,
}

#[derive(Debug, Default)]
struct Inner {
    /// Per-lecture rows, each behind its own lock.
    lectures: StdMutex<HashMap<LectureId, Arc<Mutex<SeatRow>>>>,
    /// Committed enrollment records.
    enrollments: StdMutex<Vec<Enrollment>>,
}

/// In-memory `EnrollmentStore`.
#[derive(Debug, Clone)]
pub struct MemoryEnrollmentStore {
    inner: Arc<Inner>,
    /// Bounded wait for the per-lecture hold.
    lock_wait: Duration,
}

impl MemoryEnrollmentStore {
    /// Create an empty store with the given bounded lock wait.
    pub fn new(lock_wait: Duration) -> Self {
        Self {
            inner: Arc::new(Inner::default()),
            lock_wait,
        }
    }

    /// Register a lecture and return its generated id.
    pub fn add_lecture(&self, title: &str, max_participants: i32) -> LectureId {
        let id = LectureId::new();
        self.insert_lecture(id, title, max_participants, 0);
        id
    }

    /// Register a lecture under a fixed id with a starting seat count.
    pub fn insert_lecture(
        &self,
        id: LectureId,
        title: &str,
        max_participants: i32,
        current_participants: i32,
    ) {
        let row = SeatRow {
            title: title.to_string(),
            current_participants,
            max_participants,
        };
        self.inner
            .lectures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, Arc::new(Mutex::new(row)));
    }

    /// Current committed seat count for a lecture.
    pub async fn seat_count(&self, id: LectureId) -> Option<i32> {
        let row = self.lecture_handle(id)?;
        let row = row.lock().await;
        Some(row.current_participants)
    }

    /// Number of committed enrollment records for a lecture.
    pub fn enrollment_count(&self, id: LectureId) -> usize {
        self.inner
            .enrollments
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|e| e.lecture_id == id)
            .count()
    }

    /// Snapshot of all committed enrollment records.
    pub fn enrollments(&self) -> Vec<Enrollment> {
        self.inner
            .enrollments
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn lecture_handle(&self, id: LectureId) -> Option<Arc<Mutex<SeatRow>>> {
        let map = self
            .inner
            .lectures
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        map.get(&id).cloned()
    }
}

/// Staged changes for one in-flight transaction.
#[derive(Debug)]
struct MemoryEnrollmentTx {
    inner: Arc<Inner>,
    lock_wait: Duration,
    /// The exclusive hold, once acquired.
    hold: Option<(LectureId, OwnedMutexGuard<SeatRow>)>,
    /// Whether a seat increment is staged.
    staged_increment: bool,
    /// A staged enrollment record, if any.
    staged_enrollment: Option<Enrollment>,
}

impl MemoryEnrollmentTx {
    fn held_lecture(&mut self, lecture_id: LectureId) -> AppResult<&mut OwnedMutexGuard<SeatRow>> {
        match &mut self.hold {
            Some((held_id, guard)) if *held_id == lecture_id => Ok(guard),
            _ => Err(AppError::internal(format!(
                "No exclusive hold on lecture {lecture_id}"
            ))),
        }
    }
}

#[async_trait]
impl EnrollmentStore for MemoryEnrollmentStore {
    async fn begin(&self) -> AppResult<Box<dyn EnrollmentTx>> {
        Ok(Box::new(MemoryEnrollmentTx {
            inner: Arc::clone(&self.inner),
            lock_wait: self.lock_wait,
            hold: None,
            staged_increment: false,
            staged_enrollment: None,
        }))
    }
}

#[async_trait]
impl EnrollmentTx for MemoryEnrollmentTx {
    async fn lock_lecture(&mut self, lecture_id: LectureId) -> AppResult<Option<LectureSeat>> {
        let handle = {
            let map = self
                .inner
                .lectures
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            map.get(&lecture_id).cloned()
        };
        let Some(handle) = handle else {
            return Ok(None);
        };

        let guard = tokio::time::timeout(self.lock_wait, handle.lock_owned())
            .await
            .map_err(|_| {
                AppError::timeout(format!(
                    "Timed out waiting for the seat lock on lecture {lecture_id}"
                ))
            })?;

        let seat = LectureSeat {
            id: lecture_id,
            title: guard.title.clone(),
            current_participants: guard.current_participants,
            max_participants: guard.max_participants,
        };
        self.hold = Some((lecture_id, guard));
        Ok(Some(seat))
    }

    async fn reserve_seat(&mut self, lecture_id: LectureId) -> AppResult<()> {
        let guard = self.held_lecture(lecture_id)?;
        if guard.current_participants >= guard.max_participants {
            return Err(AppError::database(format!(
                "Seat reservation raced past the capacity check for lecture {lecture_id}"
            )));
        }
        self.staged_increment = true;
        Ok(())
    }

    async fn is_enrolled(&mut self, lecture_id: LectureId, student_id: UserId) -> AppResult<bool> {
        let enrollments = self
            .inner
            .enrollments
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(enrollments
            .iter()
            .any(|e| e.lecture_id == lecture_id && e.student_id == student_id))
    }

    async fn insert_enrollment(
        &mut self,
        lecture_id: LectureId,
        student_id: UserId,
    ) -> AppResult<Enrollment> {
        // Requires the hold, like the row-locked insert in the SQL store.
        self.held_lecture(lecture_id)?;
        let enrollment = Enrollment {
            id: EnrollmentId::new(),
            lecture_id,
            student_id,
            enrolled_at: Utc::now(),
        };
        self.staged_enrollment = Some(enrollment.clone());
        Ok(enrollment)
    }

    async fn commit(mut self: Box<Self>) -> AppResult<()> {
        // Apply staged writes before releasing the hold so the next holder
        // observes them atomically.
        if let Some((_, guard)) = &mut self.hold {
            if self.staged_increment {
                guard.current_participants += 1;
            }
        } else if self.staged_increment || self.staged_enrollment.is_some() {
            return Err(AppError::internal("Staged writes without a hold"));
        }

        if let Some(enrollment) = self.staged_enrollment.take() {
            self.inner
                .enrollments
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(enrollment);
        }

        drop(self.hold.take());
        Ok(())
    }

    async fn rollback(mut self: Box<Self>) -> AppResult<()> {
        // Staged writes were never applied; releasing the hold is enough.
        self.staged_increment = false;
        self.staged_enrollment = None;
        drop(self.hold.take());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> MemoryEnrollmentStore {
        MemoryEnrollmentStore::new(Duration::from_millis(200))
    }

    #[tokio::test]
    async fn test_commit_applies_staged_writes() {
        let store = store();
        let lecture = store.add_lecture("Rust 101", 5);
        let student = UserId::new();

        let mut tx = store.begin().await.unwrap();
        let seat = tx.lock_lecture(lecture).await.unwrap().unwrap();
        assert_eq!(seat.current_participants, 0);
        tx.insert_enrollment(lecture, student).await.unwrap();
        tx.reserve_seat(lecture).await.unwrap();
        tx.commit().await.unwrap();

        assert_eq!(store.seat_count(lecture).await, Some(1));
        assert_eq!(store.enrollment_count(lecture), 1);
    }

    #[tokio::test]
    async fn test_rollback_discards_staged_writes() {
        let store = store();
        let lecture = store.add_lecture("Rust 101", 5);

        let mut tx = store.begin().await.unwrap();
        tx.lock_lecture(lecture).await.unwrap().unwrap();
        tx.insert_enrollment(lecture, UserId::new()).await.unwrap();
        tx.reserve_seat(lecture).await.unwrap();
        tx.rollback().await.unwrap();

        assert_eq!(store.seat_count(lecture).await, Some(0));
        assert_eq!(store.enrollment_count(lecture), 0);
    }

    #[tokio::test]
    async fn test_unknown_lecture_locks_nothing() {
        let store = store();
        let mut tx = store.begin().await.unwrap();
        assert!(tx.lock_lecture(LectureId::new()).await.unwrap().is_none());
        tx.rollback().await.unwrap();
    }

    #[tokio::test]
    async fn test_store_survives_poisoned_lock() {
        let store = store();

        // Panic while holding the lecture map lock to poison it.
        let inner = Arc::clone(&store.inner);
        std::thread::spawn(move || {
            let _guard = inner.lectures.lock().unwrap();
            panic!("holder panicked");
        })
        .join()
        .unwrap_err();

        let lecture = store.add_lecture("Rust 101", 5);
        assert_eq!(store.seat_count(lecture).await, Some(0));
        assert_eq!(store.enrollment_count(lecture), 0);
    }

    #[tokio::test]
    async fn test_contended_hold_times_out() {
        let store = MemoryEnrollmentStore::new(Duration::from_millis(50));
        let lecture = store.add_lecture("Rust 101", 5);

        let mut holder = store.begin().await.unwrap();
        holder.lock_lecture(lecture).await.unwrap().unwrap();

        let mut waiter = store.begin().await.unwrap();
        let err = waiter.lock_lecture(lecture).await.unwrap_err();
        assert!(err.is_retryable());

        holder.rollback().await.unwrap();
        waiter.rollback().await.unwrap();
    }
}
