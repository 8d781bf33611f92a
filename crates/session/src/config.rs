//! Session timing configuration.

use serde::{Deserialize, Serialize};

/// Countdown lengths for a workout session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Countdown before the first exercise of a fresh run (seconds)
    pub prep_seconds: u32,

    /// Countdown between exercises and on resume (seconds)
    pub rest_seconds: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prep_seconds: 5,
            rest_seconds: 10,
        }
    }
}
