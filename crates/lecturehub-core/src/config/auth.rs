//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// JWT and password settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret used to sign access and refresh tokens.
    pub jwt_secret: String,
    /// Access token time-to-live in minutes.
    #[serde(default = "default_access_ttl_minutes")]
    pub jwt_access_ttl_minutes: u64,
    /// Refresh token time-to-live in hours.
    #[serde(default = "default_refresh_ttl_hours")]
    pub jwt_refresh_ttl_hours: u64,
}

fn default_access_ttl_minutes() -> u64 {
    30
}

fn default_refresh_ttl_hours() -> u64 {
    24 * 7
}
