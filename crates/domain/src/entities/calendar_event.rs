//! Calendar event entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::EventTime;

/// A calendar event as seen by the status check
///
/// Only the time range matters for status evaluation; `uid` and `summary`
/// are carried for logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Event UID, if present
    pub uid: Option<String>,
    /// Event summary/title, if present
    pub summary: Option<String>,
    /// Start boundary (DTSTART)
    pub start: EventTime,
    /// End boundary (DTEND)
    pub end: EventTime,
}

impl CalendarEvent {
    /// Create a new event from its boundaries
    pub fn new(start: impl Into<EventTime>, end: impl Into<EventTime>) -> Self {
        Self {
            uid: None,
            summary: None,
            start: start.into(),
            end: end.into(),
        }
    }

    /// Builder: set UID
    #[must_use]
    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    /// Builder: set summary
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Both boundaries carry a time of day
    #[must_use]
    pub const fn is_timed(&self) -> bool {
        !self.start.is_date_only() && !self.end.is_date_only()
    }

    /// The UTC range of a timed event
    #[must_use]
    pub fn utc_range(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        Some((self.start.as_utc()?, self.end.as_utc()?))
    }

    /// Check if the event is running at `instant`
    ///
    /// Both boundaries are inclusive. All-day events never match.
    #[must_use]
    pub fn is_active_at(&self, instant: DateTime<Utc>) -> bool {
        self.utc_range()
            .is_some_and(|(start, end)| start <= instant && instant <= end)
    }
}
