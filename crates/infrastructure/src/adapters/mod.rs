//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod headless_surface;
mod ics_calendar_adapter;
mod image_frame_loader;
mod system_clock;

pub use headless_surface::HeadlessSurface;
pub use ics_calendar_adapter::IcsCalendarAdapter;
pub use image_frame_loader::ImageFrameLoader;
pub use system_clock::SystemClock;
