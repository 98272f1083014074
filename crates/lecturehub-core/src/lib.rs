//! # lecturehub-core
//!
//! Core crate for LectureHub. Contains configuration schemas, typed
//! identifiers, pagination/sorting types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other LectureHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
