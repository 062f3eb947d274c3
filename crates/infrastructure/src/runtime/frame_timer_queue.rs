//! One-shot frame timers backed by tokio's clock

use std::{collections::BTreeMap, time::Duration};

use application::ports::{FrameTimerPort, TimerHandle};
use tokio::time::Instant;

/// Pending one-shot timers keyed by handle
#[derive(Debug, Default)]
pub struct FrameTimerQueue {
    next_id: u64,
    pending: BTreeMap<TimerHandle, Instant>,
}

impl FrameTimerQueue {
    /// Create an empty queue
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Earliest pending timer and its deadline
    #[must_use]
    pub fn next_due(&self) -> Option<(TimerHandle, Instant)> {
        self.pending
            .iter()
            .min_by_key(|(handle, deadline)| (**deadline, **handle))
            .map(|(handle, deadline)| (*handle, *deadline))
    }

    /// Remove a timer that has fired
    ///
    /// Returns `false` if the handle was not pending.
    pub fn take(&mut self, handle: TimerHandle) -> bool {
        self.pending.remove(&handle).is_some()
    }

    /// Number of pending timers
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no timer is pending
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl FrameTimerPort for FrameTimerQueue {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle::new(self.next_id);
        self.pending.insert(handle, Instant::now() + delay);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.pending.remove(&handle).is_some()
    }
}
