//! Shared value types: typed identifiers, pagination, and sorting.

pub mod id;
pub mod pagination;
pub mod sorting;

pub use id::{EnrollmentId, LectureId, UserId};
pub use pagination::{PageRequest, PageResponse};
pub use sorting::LectureSort;
