//! Clock port

use chrono::{DateTime, Utc};
#[cfg(test)]
use mockall::automock;

/// Source of the current instant
#[cfg_attr(test, automock)]
pub trait ClockPort: Send + Sync {
    /// Current time in UTC
    fn now(&self) -> DateTime<Utc>;
}
