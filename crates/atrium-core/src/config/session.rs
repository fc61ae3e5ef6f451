//! Session management configuration.

use serde::{Deserialize, Serialize};

/// Session management configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Idle timeout in minutes before a session is rejected and deactivated.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_minutes: i64,
    /// Absolute session lifetime in hours (regardless of activity).
    #[serde(default = "default_absolute_timeout")]
    pub absolute_timeout_hours: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout_minutes: default_idle_timeout(),
            absolute_timeout_hours: default_absolute_timeout(),
        }
    }
}

fn default_idle_timeout() -> i64 {
    30
}

fn default_absolute_timeout() -> i64 {
    12
}
