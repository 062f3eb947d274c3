//! Status value object
//!
//! The single answer the widget cares about: is an event running right now?

use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar status at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// No timed event covers the instant
    #[default]
    Idle,
    /// At least one timed event covers the instant
    Busy,
}

impl Status {
    /// Check if the status is busy
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        matches!(self, Self::Busy)
    }

    /// Get the upper-case label used in logs
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Busy => "BUSY",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Status {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "idle" | "free" => Ok(Self::Idle),
            "busy" | "stressed" => Ok(Self::Busy),
            _ => Err("Invalid status"),
        }
    }
}
