//! Calendar file configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where to find the ICS calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Path to the calendar file, relative to the working directory
    #[serde(default = "default_calendar_path")]
    pub path: PathBuf,
}

fn default_calendar_path() -> PathBuf {
    PathBuf::from("my_schedule.ics")
}

impl CalendarConfig {
    /// Calendar path for log output
    #[must_use]
    pub fn path_string(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            path: default_calendar_path(),
        }
    }
}
