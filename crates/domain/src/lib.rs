//! Domain layer for Life Cube
//!
//! Contains the calendar event model, the BUSY/IDLE status and the
//! animation frame types. No I/O happens here.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
