//! Logging setup
//!
//! Console logging through `tracing-subscriber`: an `EnvFilter` built from
//! the configured directive plus a text or JSON `fmt` layer.

mod logging;

pub use logging::{TelemetryError, build_filter, init_logging};
