//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod calendar_source_port;
mod clock_port;
mod frame_loader_port;
mod frame_timer_port;
mod render_surface_port;

#[cfg(test)]
pub use calendar_source_port::MockCalendarSourcePort;
pub use calendar_source_port::{CalendarSourcePort, ScheduleError};
#[cfg(test)]
pub use clock_port::MockClockPort;
pub use clock_port::ClockPort;
#[cfg(test)]
pub use frame_loader_port::MockFrameLoaderPort;
pub use frame_loader_port::{AssetLoadError, FrameLoaderPort};
pub use frame_timer_port::{FrameTimerPort, TimerHandle};
#[cfg(test)]
pub use render_surface_port::MockRenderSurfacePort;
pub use render_surface_port::RenderSurfacePort;
