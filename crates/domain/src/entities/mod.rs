//! Domain entities

mod calendar_event;
mod frame;

pub use calendar_event::CalendarEvent;
pub use frame::{Frame, FrameSequence, PLACEHOLDER_RGBA, PLACEHOLDER_SIZE};
