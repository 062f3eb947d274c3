//! ICS calendar adapter - Implements CalendarSourcePort using integration_ics

use std::path::PathBuf;

use application::ports::{CalendarSourcePort, ScheduleError};
use domain::CalendarEvent;
use integration_ics::{IcsError, IcsFileReader};
use tracing::instrument;

/// Adapter reading events from a local `.ics` file
#[derive(Debug, Clone)]
pub struct IcsCalendarAdapter {
    reader: IcsFileReader,
}

impl IcsCalendarAdapter {
    /// Create an adapter for the calendar at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            reader: IcsFileReader::new(path),
        }
    }
}

impl CalendarSourcePort for IcsCalendarAdapter {
    #[instrument(skip(self))]
    fn load_events(&self) -> Result<Vec<CalendarEvent>, ScheduleError> {
        self.reader.read_events().map_err(map_ics_error)
    }

    fn location(&self) -> String {
        self.reader.path().display().to_string()
    }
}

fn map_ics_error(err: IcsError) -> ScheduleError {
    match err {
        IcsError::NotFound(path) => ScheduleError::MissingFile(path),
        IcsError::Read { path, source } => ScheduleError::Unreadable {
            path,
            reason: source.to_string(),
        },
        e @ (IcsError::Parse(_) | IcsError::InvalidDateTime { .. }) => {
            ScheduleError::Parse(e.to_string())
        },
    }
}
