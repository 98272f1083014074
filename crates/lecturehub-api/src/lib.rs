//! # lecturehub-api
//!
//! HTTP API layer for LectureHub built on Axum.
//!
//! Provides the REST endpoints (signup, login, lecture catalog, batch
//! enrollment), the authenticated-user extractor, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::run_server;
pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
