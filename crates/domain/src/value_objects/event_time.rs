//! Event boundary value object

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Start or end of a calendar event
///
/// iCalendar allows `DTSTART`/`DTEND` to be either a calendar date or a
/// date-time. Date-times are always stored normalised to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum EventTime {
    /// Date-only value (all-day boundary)
    Date(NaiveDate),
    /// Date-time value in UTC
    DateTime(DateTime<Utc>),
}

impl EventTime {
    /// The UTC instant, if this is a date-time
    #[must_use]
    pub const fn as_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(*dt),
            Self::Date(_) => None,
        }
    }

    /// Check if this is a date-only value
    #[must_use]
    pub const fn is_date_only(&self) -> bool {
        matches!(self, Self::Date(_))
    }
}

impl From<DateTime<Utc>> for EventTime {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::DateTime(dt)
    }
}

impl From<NaiveDate> for EventTime {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{date}"),
            Self::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
        }
    }
}
