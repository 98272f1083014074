//! Enrollment admission-control configuration.

use serde::{Deserialize, Serialize};

/// Settings for the enrollment transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentConfig {
    /// Maximum time to wait for the exclusive lecture-row hold, in
    /// milliseconds. A transaction that cannot acquire the hold within this
    /// bound fails the single item with a retryable outcome instead of
    /// blocking indefinitely.
    #[serde(default = "default_lock_wait_ms")]
    pub lock_wait_ms: u64,
}

impl Default for EnrollmentConfig {
    fn default() -> Self {
        Self {
            lock_wait_ms: default_lock_wait_ms(),
        }
    }
}

fn default_lock_wait_ms() -> u64 {
    2_000
}
