//! Animation player
//!
//! Two-state machine (IDLE, BUSY) driving a looping frame sequence. Two
//! timers feed it: a slow poll that asks the schedule evaluator for the
//! status, and a fast one-shot frame timer that the player re-arms after every
//! frame it draws. The two cadences are independent.
//!
//! Invariant: at most one frame timer is pending. A status switch cancels the
//! pending timer before the new loop starts.

use std::{fmt, time::Duration};

use domain::{FrameSequence, Status};
use tracing::{debug, info, instrument, trace, warn};

use crate::{
    ports::{FrameTimerPort, RenderSurfacePort, TimerHandle},
    services::ScheduleEvaluator,
};

/// Owns the widget's animation state
pub struct AnimationPlayer {
    evaluator: ScheduleEvaluator,
    idle: FrameSequence,
    busy: FrameSequence,
    surface: Box<dyn RenderSurfacePort>,
    frame_interval: Duration,
    active: Option<Status>,
    frame_index: usize,
    frame_timer: Option<TimerHandle>,
}

impl fmt::Debug for AnimationPlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationPlayer")
            .field("active", &self.active)
            .field("frame_index", &self.frame_index)
            .field("frame_timer", &self.frame_timer)
            .field("idle_frames", &self.idle.len())
            .field("busy_frames", &self.busy.len())
            .finish_non_exhaustive()
    }
}

impl AnimationPlayer {
    /// Create a player with no active status
    ///
    /// Nothing is drawn until the first [`poll`](Self::poll) or
    /// [`apply_status`](Self::apply_status).
    pub fn new(
        evaluator: ScheduleEvaluator,
        idle: FrameSequence,
        busy: FrameSequence,
        surface: Box<dyn RenderSurfacePort>,
        frame_interval: Duration,
    ) -> Self {
        Self {
            evaluator,
            idle,
            busy,
            surface,
            frame_interval,
            active: None,
            frame_index: 0,
            frame_timer: None,
        }
    }

    /// Status currently driving the animation, if any
    #[must_use]
    pub const fn active_status(&self) -> Option<Status> {
        self.active
    }

    /// Index of the next frame to draw
    #[must_use]
    pub const fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Pending frame timer, if the render loop is running
    #[must_use]
    pub const fn frame_timer(&self) -> Option<TimerHandle> {
        self.frame_timer
    }

    /// Frames for the active status
    #[must_use]
    pub const fn active_frames(&self) -> Option<&FrameSequence> {
        match self.active {
            Some(Status::Idle) => Some(&self.idle),
            Some(Status::Busy) => Some(&self.busy),
            None => None,
        }
    }

    /// Check the calendar and switch animation if the status changed
    ///
    /// Returns the new status when a switch happened.
    #[instrument(skip_all)]
    pub fn poll(&mut self, timers: &mut dyn FrameTimerPort) -> Option<Status> {
        let status = self.evaluator.evaluate();
        if self.active == Some(status) {
            debug!(status = %status, "Status unchanged");
            return None;
        }
        self.apply_status(status, timers);
        Some(status)
    }

    /// Switch to the sequence for `status` and restart the render loop
    pub fn apply_status(&mut self, status: Status, timers: &mut dyn FrameTimerPort) {
        if let Some(handle) = self.frame_timer.take() {
            timers.cancel(handle);
        }

        info!(
            from = ?self.active,
            to = %status,
            "Switching animation"
        );

        self.active = Some(status);
        self.frame_index = 0;

        if self.active_frames().is_some_and(FrameSequence::is_empty) {
            warn!(status = %status, "Animation has no frames, nothing to render");
        }

        self.render_frame(timers);
    }

    /// Draw the current frame, advance, and schedule the next frame
    ///
    /// No-op when no status is active or the active sequence is empty; in
    /// that case no further frame is scheduled.
    pub fn render_frame(&mut self, timers: &mut dyn FrameTimerPort) {
        let frames = match self.active {
            Some(Status::Idle) => &self.idle,
            Some(Status::Busy) => &self.busy,
            None => return,
        };
        let Some(frame) = frames.get(self.frame_index) else {
            return;
        };

        self.surface.clear();
        self.surface.draw_image(frame, 0, 0);
        trace!(index = self.frame_index, "Rendered frame");

        self.frame_index = (self.frame_index + 1) % frames.len();

        if let Some(stale) = self.frame_timer.take() {
            timers.cancel(stale);
        }
        self.frame_timer = Some(timers.schedule(self.frame_interval));
    }

    /// Handle a fired frame timer
    ///
    /// Handles other than the pending one are stale and ignored.
    pub fn on_timer(&mut self, handle: TimerHandle, timers: &mut dyn FrameTimerPort) {
        if self.frame_timer != Some(handle) {
            trace!(handle = %handle, "Ignoring stale frame timer");
            return;
        }
        self.frame_timer = None;
        self.render_frame(timers);
    }

    /// Stop the render loop
    pub fn shutdown(&mut self, timers: &mut dyn FrameTimerPort) {
        if let Some(handle) = self.frame_timer.take() {
            timers.cancel(handle);
        }
        debug!("Animation player stopped");
    }
}
