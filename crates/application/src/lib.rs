//! Application layer - Use cases and orchestration
//!
//! Holds the schedule evaluator and the animation player, plus the port
//! definitions they talk to. Adapters in the infrastructure layer implement
//! the ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
