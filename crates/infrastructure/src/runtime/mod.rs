//! Single-threaded widget runtime
//!
//! Drives the animation player from a tokio current-thread executor. The
//! poll interval and the frame timers are multiplexed in one loop, so player
//! state is only ever touched from one task.

mod frame_timer_queue;
mod widget_runtime;

pub use frame_timer_queue::FrameTimerQueue;
pub use widget_runtime::WidgetRuntime;
