//! Value Objects - Immutable, identity-less domain primitives

mod event_time;
mod status;

pub use event_time::EventTime;
pub use status::Status;
