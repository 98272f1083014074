//! Enrollment entity, per-item outcomes, and the storage-collaborator traits.

pub mod model;
pub mod outcome;
pub mod store;

pub use model::Enrollment;
pub use outcome::{BatchOutcome, BatchStatus, EnrollOutcome};
pub use store::{EnrollmentStore, EnrollmentTx, LectureSeat};
