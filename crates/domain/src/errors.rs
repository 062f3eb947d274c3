//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// Frame width or height is zero
    #[error("Invalid frame dimensions: {width}x{height}")]
    InvalidFrameDimensions { width: u32, height: u32 },

    /// Pixel buffer length does not match the frame dimensions
    #[error("Pixel buffer has {actual} bytes, expected {expected}")]
    PixelBufferMismatch { expected: usize, actual: usize },
}
