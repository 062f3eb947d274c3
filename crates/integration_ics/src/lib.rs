//! iCalendar integration
//!
//! Reads local `.ics` files and turns their VEVENTs into domain
//! [`CalendarEvent`](domain::CalendarEvent)s with UTC-normalised boundaries.

pub mod parser;
pub mod reader;
pub mod timezone;

pub use parser::{IcsError, parse_event_time, parse_event_time_in, parse_events};
pub use reader::IcsFileReader;
pub use timezone::{Timezones, VTimezone, windows_zone};
