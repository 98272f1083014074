//! Per-item enrollment outcomes and batch classification.
//!
//! Expected business results are modeled as enum variants rather than
//! errors: the batch coordinator consumes them without exception-style
//! control flow, and only infrastructure failures propagate as `AppError`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use lecturehub_core::types::LectureId;

use super::model::Enrollment;

/// The result of one enrollment attempt against one lecture.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EnrollOutcome {
    /// Seat reserved and enrollment record committed.
    Committed {
        /// The new enrollment record.
        enrollment: Enrollment,
        /// Title of the lecture, for reporting.
        lecture_title: String,
    },
    /// The lecture was full at the moment of the atomic check.
    CapacityExceeded {
        /// Title of the lecture, for reporting.
        lecture_title: String,
    },
    /// The student already holds an enrollment for this lecture.
    AlreadyEnrolled {
        /// Title of the lecture, for reporting.
        lecture_title: String,
    },
    /// No lecture with the given identifier exists.
    LectureNotFound {
        /// The unresolvable identifier.
        lecture_id: LectureId,
    },
    /// The exclusive row hold could not be acquired within the configured
    /// bound. Retryable; distinct from a full lecture.
    LockTimeout {
        /// The contended lecture.
        lecture_id: LectureId,
    },
}

impl EnrollOutcome {
    /// Whether this outcome represents a committed enrollment.
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }

    /// The key under which this item is reported: the lecture title when it
    /// could be resolved, the raw lecture id otherwise.
    pub fn report_key(&self) -> String {
        match self {
            Self::Committed { lecture_title, .. }
            | Self::CapacityExceeded { lecture_title }
            | Self::AlreadyEnrolled { lecture_title } => lecture_title.clone(),
            Self::LectureNotFound { lecture_id } | Self::LockTimeout { lecture_id } => {
                lecture_id.to_string()
            }
        }
    }

    /// Human-readable status string for this item.
    pub fn report_message(&self) -> &'static str {
        match self {
            Self::Committed { .. } => "Enrollment confirmed",
            Self::CapacityExceeded { .. } => "Lecture has reached its seat capacity",
            Self::AlreadyEnrolled { .. } => "Already enrolled in this lecture",
            Self::LectureNotFound { .. } => "Lecture not found",
            Self::LockTimeout { .. } => "Lecture is busy, please retry",
        }
    }
}

/// Overall classification of one batch call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    /// Every item committed.
    Success,
    /// Some items committed, some failed.
    PartialSuccess,
    /// No item committed.
    Failure,
}

impl BatchStatus {
    /// Classify a batch from its committed/total counts.
    ///
    /// An empty batch has no committed item and classifies as `Failure`.
    pub fn classify(committed: usize, total: usize) -> Self {
        if total > 0 && committed == total {
            Self::Success
        } else if committed == 0 {
            Self::Failure
        } else {
            Self::PartialSuccess
        }
    }
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Success => "success",
            Self::PartialSuccess => "partial_success",
            Self::Failure => "failure",
        };
        write!(f, "{s}")
    }
}

/// The reportable summary of one batch enrollment call.
///
/// Ephemeral; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchOutcome {
    /// Overall classification.
    pub status: BatchStatus,
    /// Per-item status strings keyed by lecture title (or raw id when the
    /// lecture could not be resolved).
    pub results: BTreeMap<String, String>,
    /// The individual outcomes, in caller-supplied item order.
    pub outcomes: Vec<EnrollOutcome>,
}

impl BatchOutcome {
    /// Build a batch summary from per-item outcomes.
    pub fn from_outcomes(outcomes: Vec<EnrollOutcome>) -> Self {
        let committed = outcomes.iter().filter(|o| o.is_committed()).count();
        let status = BatchStatus::classify(committed, outcomes.len());

        let results = outcomes
            .iter()
            .map(|o| (o.report_key(), o.report_message().to_string()))
            .collect();

        Self {
            status,
            results,
            outcomes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capacity(title: &str) -> EnrollOutcome {
        EnrollOutcome::CapacityExceeded {
            lecture_title: title.to_string(),
        }
    }

    fn duplicate(title: &str) -> EnrollOutcome {
        EnrollOutcome::AlreadyEnrolled {
            lecture_title: title.to_string(),
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(BatchStatus::classify(2, 2), BatchStatus::Success);
        assert_eq!(BatchStatus::classify(1, 2), BatchStatus::PartialSuccess);
        assert_eq!(BatchStatus::classify(0, 2), BatchStatus::Failure);
        assert_eq!(BatchStatus::classify(0, 0), BatchStatus::Failure);
    }

    #[test]
    fn test_all_failures_classify_as_failure() {
        let outcome = BatchOutcome::from_outcomes(vec![capacity("A"), duplicate("B")]);
        assert_eq!(outcome.status, BatchStatus::Failure);
        assert_eq!(
            outcome.results.get("A").map(String::as_str),
            Some("Lecture has reached its seat capacity")
        );
        assert_eq!(
            outcome.results.get("B").map(String::as_str),
            Some("Already enrolled in this lecture")
        );
    }

    #[test]
    fn test_not_found_keyed_by_raw_id() {
        let id = LectureId::new();
        let outcome = BatchOutcome::from_outcomes(vec![EnrollOutcome::LectureNotFound {
            lecture_id: id,
        }]);
        assert!(outcome.results.contains_key(&id.to_string()));
    }
}
