//! # lecturehub-service
//!
//! Business logic service layer for LectureHub. Each service orchestrates
//! repositories, the enrollment store, and authentication to implement
//! application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod context;
pub mod enrollment;
pub mod lecture;
pub mod user;

pub use auth::AuthService;
pub use context::RequestContext;
pub use enrollment::EnrollmentService;
pub use lecture::LectureService;
pub use user::UserService;
