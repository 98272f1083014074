//! Concurrency-safe enrollment admission.
//!
//! Every admission runs as one transaction against the enrollment store:
//! take the exclusive per-lecture hold, check capacity, check for a prior
//! enrollment, then write the record and bump the seat count. Expected
//! business results (full, duplicate, missing, contended) surface as
//! [`EnrollOutcome`] variants; only infrastructure failures propagate as
//! errors. A batch processes its items independently, in order, one
//! transaction per item, so one rejected lecture never unwinds another.

use std::sync::Arc;

use tracing::{info, warn};

use lecturehub_core::error::ErrorKind;
use lecturehub_core::result::AppResult;
use lecturehub_core::types::{LectureId, UserId};
use lecturehub_entity::enrollment::{BatchOutcome, EnrollOutcome, EnrollmentStore, EnrollmentTx};

/// Admits students into lectures without ever exceeding seat capacity.
#[derive(Debug, Clone)]
pub struct EnrollmentService {
    /// Transactional store backing admissions.
    store: Arc<dyn EnrollmentStore>,
}

impl EnrollmentService {
    /// Creates a new enrollment service.
    pub fn new(store: Arc<dyn EnrollmentStore>) -> Self {
        Self { store }
    }

    /// Attempts to enroll one student into one lecture.
    ///
    /// Returns `Ok` with the business outcome for every expected result,
    /// including rejections; `Err` is reserved for infrastructure failures.
    pub async fn enroll(
        &self,
        student_id: UserId,
        lecture_id: LectureId,
    ) -> AppResult<EnrollOutcome> {
        let mut tx = self.store.begin().await?;

        let seat = match tx.lock_lecture(lecture_id).await {
            Ok(Some(seat)) => seat,
            Ok(None) => {
                abort(tx).await;
                return Ok(EnrollOutcome::LectureNotFound { lecture_id });
            }
            Err(e) if e.kind == ErrorKind::Timeout => {
                abort(tx).await;
                info!(%lecture_id, %student_id, "Seat lock wait expired");
                return Ok(EnrollOutcome::LockTimeout { lecture_id });
            }
            Err(e) => {
                abort(tx).await;
                return Err(e);
            }
        };

        if seat.is_full() {
            abort(tx).await;
            return Ok(EnrollOutcome::CapacityExceeded {
                lecture_title: seat.title,
            });
        }

        match tx.is_enrolled(lecture_id, student_id).await {
            Ok(false) => {}
            Ok(true) => {
                abort(tx).await;
                return Ok(EnrollOutcome::AlreadyEnrolled {
                    lecture_title: seat.title,
                });
            }
            Err(e) => {
                abort(tx).await;
                return Err(e);
            }
        }

        let enrollment = match tx.insert_enrollment(lecture_id, student_id).await {
            Ok(enrollment) => enrollment,
            // The unique constraint is the backstop for a duplicate that
            // slipped past the check in another transaction.
            Err(e) if e.kind == ErrorKind::Conflict => {
                abort(tx).await;
                return Ok(EnrollOutcome::AlreadyEnrolled {
                    lecture_title: seat.title,
                });
            }
            Err(e) => {
                abort(tx).await;
                return Err(e);
            }
        };

        if let Err(e) = tx.reserve_seat(lecture_id).await {
            abort(tx).await;
            return Err(e);
        }

        tx.commit().await?;

        info!(%lecture_id, %student_id, "Enrollment committed");

        Ok(EnrollOutcome::Committed {
            enrollment,
            lecture_title: seat.title,
        })
    }

    /// Processes a batch of enrollment requests for one student.
    ///
    /// Items are admitted in caller order, each in its own transaction. A
    /// lecture id appearing twice is admitted once; the repeat reports as
    /// already enrolled.
    pub async fn enroll_batch(
        &self,
        student_id: UserId,
        lecture_ids: Vec<LectureId>,
    ) -> AppResult<BatchOutcome> {
        let mut outcomes = Vec::with_capacity(lecture_ids.len());
        for lecture_id in lecture_ids {
            outcomes.push(self.enroll(student_id, lecture_id).await?);
        }

        let batch = BatchOutcome::from_outcomes(outcomes);
        info!(
            %student_id,
            status = %batch.status,
            items = batch.outcomes.len(),
            "Batch enrollment processed"
        );
        Ok(batch)
    }
}

/// Best-effort rollback on an abandoned admission attempt.
async fn abort(tx: Box<dyn EnrollmentTx>) {
    if let Err(e) = tx.rollback().await {
        warn!(error = %e, "Rollback failed after an aborted enrollment");
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use lecturehub_database::MemoryEnrollmentStore;
    use lecturehub_entity::enrollment::BatchStatus;

    use super::*;

    fn service() -> (EnrollmentService, Arc<MemoryEnrollmentStore>) {
        let store = Arc::new(MemoryEnrollmentStore::new(Duration::from_millis(200)));
        (EnrollmentService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_enroll_commits_seat_and_record() {
        let (service, store) = service();
        let lecture = store.add_lecture("Rust 101", 3);
        let student = UserId::new();

        let outcome = service.enroll(student, lecture).await.unwrap();

        assert!(outcome.is_committed());
        assert_eq!(store.seat_count(lecture).await, Some(1));
        assert_eq!(store.enrollment_count(lecture), 1);
    }

    #[tokio::test]
    async fn test_full_lecture_rejected_without_side_effects() {
        let (service, store) = service();
        let lecture = LectureId::new();
        store.insert_lecture(lecture, "Popular", 2, 2);

        let outcome = service.enroll(UserId::new(), lecture).await.unwrap();

        assert!(matches!(outcome, EnrollOutcome::CapacityExceeded { .. }));
        assert_eq!(store.seat_count(lecture).await, Some(2));
        assert_eq!(store.enrollment_count(lecture), 0);
    }

    #[tokio::test]
    async fn test_duplicate_enrollment_rejected() {
        let (service, store) = service();
        let lecture = store.add_lecture("Rust 101", 5);
        let student = UserId::new();

        assert!(service.enroll(student, lecture).await.unwrap().is_committed());
        let second = service.enroll(student, lecture).await.unwrap();

        assert!(matches!(second, EnrollOutcome::AlreadyEnrolled { .. }));
        assert_eq!(store.seat_count(lecture).await, Some(1));
        assert_eq!(store.enrollment_count(lecture), 1);
    }

    #[tokio::test]
    async fn test_unknown_lecture_reports_not_found() {
        let (service, _store) = service();
        let missing = LectureId::new();

        let outcome = service.enroll(UserId::new(), missing).await.unwrap();

        assert!(
            matches!(outcome, EnrollOutcome::LectureNotFound { lecture_id } if lecture_id == missing)
        );
    }

    #[tokio::test]
    async fn test_batch_partial_success() {
        let (service, store) = service();
        let open = store.add_lecture("Open", 5);
        let full = LectureId::new();
        store.insert_lecture(full, "Full", 1, 1);

        let batch = service
            .enroll_batch(UserId::new(), vec![open, full])
            .await
            .unwrap();

        assert_eq!(batch.status, BatchStatus::PartialSuccess);
        assert_eq!(
            batch.results.get("Open").map(String::as_str),
            Some("Enrollment confirmed")
        );
        assert_eq!(
            batch.results.get("Full").map(String::as_str),
            Some("Lecture has reached its seat capacity")
        );
    }

    #[tokio::test]
    async fn test_batch_with_repeated_lecture_admits_once() {
        let (service, store) = service();
        let lecture = store.add_lecture("Rust 101", 5);

        let batch = service
            .enroll_batch(UserId::new(), vec![lecture, lecture])
            .await
            .unwrap();

        assert_eq!(batch.status, BatchStatus::PartialSuccess);
        assert!(batch.outcomes[0].is_committed());
        assert!(matches!(
            batch.outcomes[1],
            EnrollOutcome::AlreadyEnrolled { .. }
        ));
        assert_eq!(store.seat_count(lecture).await, Some(1));
    }

    #[tokio::test]
    async fn test_empty_batch_classifies_as_failure() {
        let (service, _store) = service();

        let batch = service.enroll_batch(UserId::new(), vec![]).await.unwrap();

        assert_eq!(batch.status, BatchStatus::Failure);
        assert!(batch.results.is_empty());
    }

    #[tokio::test]
    async fn test_resubmission_is_idempotent() {
        let (service, store) = service();
        let first = store.add_lecture("First", 5);
        let second = LectureId::new();
        store.insert_lecture(second, "Second", 1, 1);
        let student = UserId::new();

        let initial = service
            .enroll_batch(student, vec![first, second])
            .await
            .unwrap();
        assert_eq!(initial.status, BatchStatus::PartialSuccess);

        let retry = service
            .enroll_batch(student, vec![first, second])
            .await
            .unwrap();

        assert_eq!(retry.status, BatchStatus::Failure);
        assert!(matches!(
            retry.outcomes[0],
            EnrollOutcome::AlreadyEnrolled { .. }
        ));
        assert_eq!(store.seat_count(first).await, Some(1));
        assert_eq!(store.enrollment_count(first), 1);
    }
}
