//! HTTP request handlers, organized by domain.

pub mod auth;
pub mod enrollment;
pub mod health;
pub mod lecture;
pub mod user;
