//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the ICS calendar
//! reader, image decoding, the render surface and the timer-driven runtime.
//! Also owns configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod runtime;
pub mod telemetry;

pub use adapters::*;
pub use config::{
    AppConfig, AssetsConfig, CalendarConfig, LogFormat, LoggingConfig, SurfaceConfig,
    TimingConfig,
};
pub use runtime::{FrameTimerQueue, WidgetRuntime};
pub use telemetry::{TelemetryError, init_logging};
