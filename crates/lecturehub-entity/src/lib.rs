//! # lecturehub-entity
//!
//! Domain entity models for LectureHub: users, lectures, enrollments,
//! per-item enrollment outcomes, and the storage-collaborator traits the
//! admission-control core operates against.

pub mod enrollment;
pub mod lecture;
pub mod user;
