//! Lecture publication and catalog browsing.

pub mod service;

pub use service::{CreateLectureRequest, LectureService};
