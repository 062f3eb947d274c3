//! Schedule evaluator
//!
//! Answers one question: is a timed calendar event running right now?

use std::{fmt, sync::Arc};

use chrono::{DateTime, Utc};
use domain::Status;
use tracing::{debug, info, instrument, warn};

use crate::ports::{CalendarSourcePort, ClockPort, ScheduleError};

/// Maps the calendar and the clock to BUSY or IDLE
pub struct ScheduleEvaluator {
    source: Arc<dyn CalendarSourcePort>,
    clock: Arc<dyn ClockPort>,
}

impl fmt::Debug for ScheduleEvaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScheduleEvaluator")
            .field("source", &self.source.location())
            .finish_non_exhaustive()
    }
}

impl ScheduleEvaluator {
    /// Create a new evaluator
    pub fn new(source: Arc<dyn CalendarSourcePort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { source, clock }
    }

    /// Status for the clock's current instant
    pub fn evaluate(&self) -> Status {
        self.evaluate_at(self.clock.now())
    }

    /// Status at `now`
    ///
    /// Never fails: any problem reading or parsing the calendar is logged
    /// and reported as IDLE.
    #[instrument(skip(self), fields(source = %self.source.location()))]
    pub fn evaluate_at(&self, now: DateTime<Utc>) -> Status {
        match self.check(now) {
            Ok(status) => status,
            Err(e) if e.is_missing() => {
                info!(error = %e, "No calendar file, reporting IDLE");
                Status::Idle
            },
            Err(e) => {
                warn!(error = %e, kind = e.kind(), "Calendar unavailable, reporting IDLE");
                Status::Idle
            },
        }
    }

    /// Fallible status check at `now`
    ///
    /// # Errors
    ///
    /// Returns the calendar source's error unchanged.
    pub fn check(&self, now: DateTime<Utc>) -> Result<Status, ScheduleError> {
        let events = self.source.load_events()?;

        if let Some(event) = events.iter().find(|event| event.is_active_at(now)) {
            debug!(
                uid = ?event.uid,
                summary = ?event.summary,
                "Active event found"
            );
            return Ok(Status::Busy);
        }

        let skipped = events.iter().filter(|event| !event.is_timed()).count();
        debug!(
            events = events.len(),
            all_day_skipped = skipped,
            "No active event"
        );
        Ok(Status::Idle)
    }
}
