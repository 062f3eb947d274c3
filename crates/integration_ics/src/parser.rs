//! iCalendar (RFC 5545) event parsing
//!
//! Only VEVENT components are read. `DTSTART`/`DTEND` values are normalised:
//! - `20260210` or `VALUE=DATE` → date-only
//! - `20260210T090000Z` → UTC
//! - `20260210T090000` → floating, taken as UTC
//! - `TZID=Europe/Berlin:20260210T100000` → converted to UTC via `chrono-tz`
//! - `TZID=W. Europe Standard Time:...` → the calendar's own VTIMEZONE for that
//!   id, else the IANA zone for a Windows name

use std::path::PathBuf;

use chrono::{
    DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc,
};
use chrono_tz::Tz;
use domain::{CalendarEvent, EventTime};
use icalendar::{CalendarComponent, Component, Event, Parameter, parser};
use thiserror::Error;
use tracing::{debug, warn};

use crate::timezone::{Timezones, windows_zone};

/// iCalendar reading errors
#[derive(Debug, Error)]
pub enum IcsError {
    /// Calendar file does not exist
    #[error("Calendar file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Calendar file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content is not an iCalendar document
    #[error("iCalendar parse error: {0}")]
    Parse(String),

    /// A date or date-time property has an unrecognised value
    #[error("Invalid {property} value: {value}")]
    InvalidDateTime { property: String, value: String },
}

/// Parse every VEVENT with both `DTSTART` and `DTEND`
///
/// Events missing either property, or carrying a value that cannot be
/// interpreted, are skipped; the rest of the calendar is still returned.
/// All-day events are returned with date-only boundaries; callers decide
/// what to do with them.
///
/// # Errors
///
/// Fails if the input has no `VCALENDAR` block or if the iCalendar parser
/// rejects it.
pub fn parse_events(ical_data: &str) -> Result<Vec<CalendarEvent>, IcsError> {
    if !ical_data.to_ascii_uppercase().contains("BEGIN:VCALENDAR") {
        return Err(IcsError::Parse("missing BEGIN:VCALENDAR".to_string()));
    }

    let unfolded = parser::unfold(ical_data);
    let parsed = parser::read_calendar(&unfolded)
        .map_err(|e| IcsError::Parse(format!("{e}")))?;

    let zones = Timezones::from_components(&parsed.components);
    let mut events = Vec::new();
    let mut incomplete = 0usize;
    let mut invalid = 0usize;

    for component in parsed.components {
        if let CalendarComponent::Event(event) = CalendarComponent::from(component) {
            let range = event_time(&event, "DTSTART", &zones)
                .and_then(|start| Ok((start, event_time(&event, "DTEND", &zones)?)));

            let (start, end) = match range {
                Ok(range) => range,
                Err(e) => {
                    warn!(uid = ?event.get_uid(), error = %e, "Skipping event");
                    invalid += 1;
                    continue;
                },
            };
            let (Some(start), Some(end)) = (start, end) else {
                incomplete += 1;
                continue;
            };

            let mut calendar_event = CalendarEvent::new(start, end);
            calendar_event.uid = event.get_uid().map(ToString::to_string);
            calendar_event.summary = event.get_summary().map(ToString::to_string);
            events.push(calendar_event);
        }
    }

    debug!(
        events = events.len(),
        skipped_without_range = incomplete,
        skipped_invalid = invalid,
        "Parsed calendar"
    );
    Ok(events)
}

/// Read a `DTSTART`/`DTEND`-style property of `event`
fn event_time(
    event: &Event,
    property: &str,
    zones: &Timezones,
) -> Result<Option<EventTime>, IcsError> {
    let Some(prop) = event.properties().get(property) else {
        return Ok(None);
    };

    let params = prop.params();
    let value_type = params.get("VALUE").map(Parameter::value);
    let tzid = params.get("TZID").map(Parameter::value);

    parse_event_time_in(prop.value(), value_type, tzid, zones)
        .map(Some)
        .ok_or_else(|| IcsError::InvalidDateTime {
            property: property.to_string(),
            value: prop.value().to_string(),
        })
}

/// Interpret a date or date-time property value
///
/// `value_type` is the `VALUE` parameter and `tzid` the `TZID` parameter, if
/// present. Returns `None` for values that are neither form.
#[must_use]
pub fn parse_event_time(
    value: &str,
    value_type: Option<&str>,
    tzid: Option<&str>,
) -> Option<EventTime> {
    parse_event_time_in(value, value_type, tzid, &Timezones::default())
}

/// Like [`parse_event_time`], resolving `TZID`s against a calendar's
/// VTIMEZONE blocks
#[must_use]
pub fn parse_event_time_in(
    value: &str,
    value_type: Option<&str>,
    tzid: Option<&str>,
    zones: &Timezones,
) -> Option<EventTime> {
    let value = value.trim();

    let is_date = value_type.is_some_and(|v| v.eq_ignore_ascii_case("DATE")) || value.len() == 8;
    if is_date {
        return NaiveDate::parse_from_str(value, "%Y%m%d")
            .ok()
            .map(EventTime::Date);
    }

    if let Some(utc) = value.strip_suffix('Z').or_else(|| value.strip_suffix('z')) {
        let naive = NaiveDateTime::parse_from_str(utc, "%Y%m%dT%H%M%S").ok()?;
        return Some(EventTime::DateTime(Utc.from_utc_datetime(&naive)));
    }

    let naive = NaiveDateTime::parse_from_str(value, "%Y%m%dT%H%M%S").ok()?;
    let utc = match tzid.map(|id| id.trim_matches('"')) {
        None => Utc.from_utc_datetime(&naive),
        Some(id) => resolve_zoned(naive, id, zones),
    };
    Some(EventTime::DateTime(utc))
}

/// IANA name first, then the calendar's VTIMEZONE, then a Windows name
fn resolve_zoned(naive: NaiveDateTime, tzid: &str, zones: &Timezones) -> DateTime<Utc> {
    if let Ok(tz) = tzid.parse::<Tz>() {
        return localize(naive, tz);
    }
    if let Some(zone) = zones.get(tzid) {
        return zone.to_utc(naive);
    }
    if let Some(tz) = windows_zone(tzid) {
        return localize(naive, tz);
    }
    warn!(tzid = %tzid, "Unknown TZID, treating time as UTC");
    Utc.from_utc_datetime(&naive)
}

/// Convert a wall-clock time in `tz` to UTC
///
/// Repeated times (DST fall-back) resolve to the earlier instant. Skipped
/// times (DST spring-forward) are shifted by the offset in effect at that
/// reading.
fn localize(naive: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
        LocalResult::None => {
            let offset = tz.offset_from_utc_datetime(&naive).fix();
            let shifted = naive - Duration::seconds(i64::from(offset.local_minus_utc()));
            Utc.from_utc_datetime(&shifted)
        },
    }
}
