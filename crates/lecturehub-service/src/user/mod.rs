//! User registration.

pub mod service;

pub use service::{RegisterRequest, UserService};
