//! Calendar source port
//!
//! Supplies the events the schedule evaluator checks against the clock.

use std::path::PathBuf;

use domain::CalendarEvent;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

/// Reasons a calendar could not be read
///
/// None of these reach the user: the evaluator reports IDLE instead.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The calendar file does not exist
    #[error("Calendar file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// The calendar file exists but could not be read
    #[error("Calendar file {} is unreadable: {reason}", .path.display())]
    Unreadable { path: PathBuf, reason: String },

    /// The calendar content is not valid iCalendar
    #[error("Calendar parse error: {0}")]
    Parse(String),
}

impl ScheduleError {
    /// Short machine-friendly name for log fields
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissingFile(_) => "missing_file",
            Self::Unreadable { .. } => "unreadable",
            Self::Parse(_) => "parse_error",
        }
    }

    /// Check if the calendar simply is not there
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::MissingFile(_))
    }
}

/// Source of calendar events
#[cfg_attr(test, automock)]
pub trait CalendarSourcePort: Send + Sync {
    /// Read and parse every event in the calendar
    fn load_events(&self) -> Result<Vec<CalendarEvent>, ScheduleError>;

    /// Human-readable location (file path) for diagnostics
    fn location(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_message() {
        let err = ScheduleError::MissingFile(PathBuf::from("my_schedule.ics"));
        assert_eq!(err.to_string(), "Calendar file not found: my_schedule.ics");
        assert_eq!(err.kind(), "missing_file");
        assert!(err.is_missing());
    }

    #[test]
    fn unreadable_message() {
        let err = ScheduleError::Unreadable {
            path: PathBuf::from("cal.ics"),
            reason: "permission denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Calendar file cal.ics is unreadable: permission denied"
        );
        assert!(!err.is_missing());
    }

    #[test]
    fn parse_error_kind() {
        let err = ScheduleError::Parse("bad DTSTART".to_string());
        assert_eq!(err.kind(), "parse_error");
        assert_eq!(err.to_string(), "Calendar parse error: bad DTSTART");
    }
}
