//! Enrollment admission control.

pub mod service;

pub use service::EnrollmentService;
