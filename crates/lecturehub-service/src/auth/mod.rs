//! Login and token reissue.

pub mod service;

pub use service::{AuthService, LoginResult, ReissueResult};
