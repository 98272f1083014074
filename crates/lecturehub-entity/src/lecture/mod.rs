//! Lecture entity.

pub mod model;

pub use model::{CreateLecture, Lecture, LectureSummary};
