//! Concrete repository implementations.

pub mod enroll_store;
pub mod enrollment;
pub mod lecture;
pub mod user;

pub use enroll_store::PgEnrollmentStore;
pub use enrollment::EnrollmentRepository;
pub use lecture::LectureRepository;
pub use user::UserRepository;
