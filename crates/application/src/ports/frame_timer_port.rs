//! Frame timer port
//!
//! One-shot timers on the widget's event loop. The animation player
//! schedules the next frame after drawing the current one and cancels the
//! pending timer when it switches sequences.

use std::{fmt, time::Duration};

/// Opaque identifier of a scheduled frame timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Wrap a raw timer id
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer-{}", self.0)
    }
}

/// Scheduler for one-shot frame timers
pub trait FrameTimerPort {
    /// Arrange for the timer to fire once after `delay`
    fn schedule(&mut self, delay: Duration) -> TimerHandle;

    /// Cancel a pending timer
    ///
    /// Returns `false` if the timer already fired or was never scheduled.
    fn cancel(&mut self, handle: TimerHandle) -> bool;
}
