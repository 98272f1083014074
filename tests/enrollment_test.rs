//! Integration tests for the enrollment admission core.
//!
//! Runs the full service against the in-memory store so concurrency
//! behavior is exercised without a database.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;

use lecturehub_core::types::{LectureId, UserId};
use lecturehub_database::MemoryEnrollmentStore;
use lecturehub_entity::enrollment::{BatchStatus, EnrollOutcome};
use lecturehub_service::EnrollmentService;

fn setup() -> (EnrollmentService, Arc<MemoryEnrollmentStore>) {
    let store = Arc::new(MemoryEnrollmentStore::new(Duration::from_secs(2)));
    (EnrollmentService::new(store.clone()), store)
}

#[tokio::test]
async fn test_capacity_never_exceeded_under_contention() {
    let (service, store) = setup();
    let lecture = store.add_lecture("Distributed Systems", 10);

    let attempts = (0..50).map(|_| {
        let service = service.clone();
        tokio::spawn(async move { service.enroll(UserId::new(), lecture).await })
    });
    let outcomes: Vec<EnrollOutcome> = join_all(attempts)
        .await
        .into_iter()
        .map(|joined| joined.expect("task panicked").expect("enroll failed"))
        .collect();

    let committed = outcomes.iter().filter(|o| o.is_committed()).count();
    let rejected = outcomes
        .iter()
        .filter(|o| matches!(o, EnrollOutcome::CapacityExceeded { .. }))
        .count();

    assert_eq!(committed, 10);
    assert_eq!(rejected, 40);
    assert_eq!(store.seat_count(lecture).await, Some(10));
    assert_eq!(store.enrollment_count(lecture), 10);
}

#[tokio::test]
async fn test_concurrent_duplicate_attempts_admit_once() {
    let (service, store) = setup();
    let lecture = store.add_lecture("Rust 101", 30);
    let student = UserId::new();

    let attempts = (0..8).map(|_| {
        let service = service.clone();
        tokio::spawn(async move { service.enroll(student, lecture).await })
    });
    let outcomes: Vec<EnrollOutcome> = join_all(attempts)
        .await
        .into_iter()
        .map(|joined| joined.expect("task panicked").expect("enroll failed"))
        .collect();

    let committed = outcomes.iter().filter(|o| o.is_committed()).count();

    assert_eq!(committed, 1);
    assert_eq!(store.seat_count(lecture).await, Some(1));
    assert_eq!(store.enrollment_count(lecture), 1);
}

#[tokio::test]
async fn test_rejection_leaves_no_partial_state() {
    let (service, store) = setup();
    let full = LectureId::new();
    store.insert_lecture(full, "Full House", 3, 3);

    for _ in 0..5 {
        let outcome = service.enroll(UserId::new(), full).await.unwrap();
        assert!(matches!(outcome, EnrollOutcome::CapacityExceeded { .. }));
    }

    assert_eq!(store.seat_count(full).await, Some(3));
    assert_eq!(store.enrollment_count(full), 0);
    assert!(store.enrollments().is_empty());
}

#[tokio::test]
async fn test_lectures_admit_independently() {
    let (service, store) = setup();
    let lectures: Vec<LectureId> = (0..5)
        .map(|i| store.add_lecture(&format!("Lecture {i}"), 20))
        .collect();

    let attempts = lectures.iter().flat_map(|&lecture| {
        let service = service.clone();
        (0..10).map(move |_| {
            let service = service.clone();
            tokio::spawn(async move { service.enroll(UserId::new(), lecture).await })
        })
    });
    for joined in join_all(attempts).await {
        assert!(joined.expect("task panicked").expect("enroll failed").is_committed());
    }

    for lecture in lectures {
        assert_eq!(store.seat_count(lecture).await, Some(10));
    }
}

#[tokio::test]
async fn test_batch_success_when_every_item_commits() {
    let (service, store) = setup();
    let a = store.add_lecture("A", 5);
    let b = store.add_lecture("B", 5);

    let batch = service
        .enroll_batch(UserId::new(), vec![a, b])
        .await
        .unwrap();

    assert_eq!(batch.status, BatchStatus::Success);
    assert_eq!(batch.results.len(), 2);
}

#[tokio::test]
async fn test_batch_keeps_processing_after_rejection() {
    let (service, store) = setup();
    let full = LectureId::new();
    store.insert_lecture(full, "Full", 1, 1);
    let open = store.add_lecture("Open", 5);
    let missing = LectureId::new();

    let batch = service
        .enroll_batch(UserId::new(), vec![full, open, missing])
        .await
        .unwrap();

    assert_eq!(batch.status, BatchStatus::PartialSuccess);
    assert_eq!(batch.outcomes.len(), 3);
    assert!(batch.outcomes[1].is_committed());
    assert_eq!(
        batch.results.get("Open").map(String::as_str),
        Some("Enrollment confirmed")
    );
    assert_eq!(
        batch.results.get(&missing.to_string()).map(String::as_str),
        Some("Lecture not found")
    );
    assert_eq!(store.seat_count(open).await, Some(1));
}

#[tokio::test]
async fn test_batch_resubmission_changes_nothing() {
    let (service, store) = setup();
    let first = store.add_lecture("First", 5);
    let second = LectureId::new();
    store.insert_lecture(second, "Second", 2, 2);
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
    assert!(matches!(
        retry.outcomes[1],
        EnrollOutcome::CapacityExceeded { .. }
    ));
    assert_eq!(store.seat_count(first).await, Some(1));
    assert_eq!(store.enrollment_count(first), 1);
}

#[tokio::test]
async fn test_last_seat_goes_to_exactly_one_student() {
    let (service, store) = setup();
    let lecture = LectureId::new();
    store.insert_lecture(lecture, "Last Seat", 10, 9);

    let attempts = (0..6).map(|_| {
        let service = service.clone();
        tokio::spawn(async move { service.enroll(UserId::new(), lecture).await })
    });
    let outcomes: Vec<EnrollOutcome> = join_all(attempts)
        .await
        .into_iter()
        .map(|joined| joined.expect("task panicked").expect("enroll failed"))
        .collect();

    assert_eq!(outcomes.iter().filter(|o| o.is_committed()).count(), 1);
    assert_eq!(store.seat_count(lecture).await, Some(10));
}
