//! ICS file reader

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use domain::CalendarEvent;
use tracing::{debug, instrument};

use crate::parser::{IcsError, parse_events};

/// Reads events from an `.ics` file on every call
///
/// Nothing is cached; the file is re-read so edits show up on the next poll.
#[derive(Debug, Clone)]
pub struct IcsFileReader {
    path: PathBuf,
}

impl IcsFileReader {
    /// Create a reader for `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the calendar file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the file
    ///
    /// # Errors
    ///
    /// Returns [`IcsError::NotFound`] if the file does not exist,
    /// [`IcsError::Read`] on other I/O failures and a parse error if the
    /// content is not a valid calendar.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn read_events(&self) -> Result<Vec<CalendarEvent>, IcsError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(IcsError::NotFound(self.path.clone()));
            },
            Err(source) => {
                return Err(IcsError::Read {
                    path: self.path.clone(),
                    source,
                });
            },
        };

        debug!(bytes = bytes.len(), "Calendar file read");
        parse_events(&String::from_utf8_lossy(&bytes))
    }
}
