//! Poll and frame timer configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Cadence of the two widget timers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Seconds between calendar checks (default: 30)
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,

    /// Milliseconds between animation frames (default: 50)
    #[serde(default = "default_frame_interval")]
    pub frame_interval_ms: u64,
}

const fn default_poll_interval() -> u64 {
    30
}

const fn default_frame_interval() -> u64 {
    50
}

impl TimingConfig {
    /// Calendar poll interval
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// Frame advance interval
    #[must_use]
    pub const fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval(),
            frame_interval_ms: default_frame_interval(),
        }
    }
}
