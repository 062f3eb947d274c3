//! Animation asset configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Animation files for each status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Animation shown while IDLE
    #[serde(default = "default_idle")]
    pub idle: PathBuf,

    /// Animation shown while BUSY
    #[serde(default = "default_busy")]
    pub busy: PathBuf,
}

fn default_idle() -> PathBuf {
    PathBuf::from("assets/idle.gif")
}

fn default_busy() -> PathBuf {
    PathBuf::from("assets/stressed.gif")
}

impl AssetsConfig {
    /// Idle animation path for log output
    #[must_use]
    pub fn idle_string(&self) -> String {
        self.idle.to_string_lossy().into_owned()
    }

    /// Busy animation path for log output
    #[must_use]
    pub fn busy_string(&self) -> String {
        self.busy.to_string_lossy().into_owned()
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            idle: default_idle(),
            busy: default_busy(),
        }
    }
}
