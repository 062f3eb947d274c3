//! Widget event loop

use std::{future::Future, time::Duration};

use application::{AnimationPlayer, ports::TimerHandle};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use super::FrameTimerQueue;

/// Event loop owning the player and its frame timers
#[derive(Debug)]
pub struct WidgetRuntime {
    player: AnimationPlayer,
    timers: FrameTimerQueue,
    poll_interval: Duration,
}

impl WidgetRuntime {
    /// Minimum poll interval; `tokio::time::interval` rejects zero
    const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

    pub fn new(player: AnimationPlayer, poll_interval: Duration) -> Self {
        Self {
            player,
            timers: FrameTimerQueue::new(),
            poll_interval: poll_interval.max(Self::MIN_POLL_INTERVAL),
        }
    }

    /// Run until `shutdown` resolves, then return the stopped player
    ///
    /// The calendar is polled immediately and then every poll interval.
    /// Frame timers fire in deadline order between polls.
    pub async fn run_until<F>(mut self, shutdown: F) -> AnimationPlayer
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        let mut poll = time::interval(self.poll_interval);
        poll.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            poll_interval_ms = u64::try_from(self.poll_interval.as_millis()).unwrap_or(u64::MAX),
            "Widget runtime started"
        );

        loop {
            let next_frame = self.timers.next_due();

            tokio::select! {
                biased;

                () = &mut shutdown => {
                    debug!("Shutdown requested");
                    break;
                }
                _ = poll.tick() => {
                    if let Some(status) = self.player.poll(&mut self.timers) {
                        debug!(status = %status, "Status changed");
                    }
                }
                handle = frame_expiry(next_frame) => {
                    self.timers.take(handle);
                    self.player.on_timer(handle, &mut self.timers);
                }
            }
        }

        self.player.shutdown(&mut self.timers);
        info!("Widget runtime stopped");
        self.player
    }
}

/// Resolve when the given timer is due; never resolves without one
async fn frame_expiry(next: Option<(TimerHandle, Instant)>) -> TimerHandle {
    match next {
        Some((handle, deadline)) => {
            time::sleep_until(deadline).await;
            handle
        },
        None => std::future::pending().await,
    }
}
