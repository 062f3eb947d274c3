//! Animation frames
//!
//! A `Frame` is a decoded RGBA8 image. Pixel data sits behind an `Arc` so the
//! two sequences can be swapped in and out of the player without copying.

use std::{fmt, sync::Arc};

use crate::errors::DomainError;

/// Edge length of the placeholder frame (matches the widget surface)
pub const PLACEHOLDER_SIZE: u32 = 200;

/// Neutral grey used for the placeholder frame
pub const PLACEHOLDER_RGBA: [u8; 4] = [200, 200, 200, 255];

/// A single decoded RGBA8 image
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Arc<[u8]>,
}

impl Frame {
    /// Create a frame from raw RGBA8 pixels
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero or the buffer length is not
    /// `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, DomainError> {
        if width == 0 || height == 0 {
            return Err(DomainError::InvalidFrameDimensions { width, height });
        }
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(DomainError::PixelBufferMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels: pixels.into(),
        })
    }

    /// Create a frame filled with a single colour
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, DomainError> {
        let count = width as usize * height as usize;
        let pixels = rgba.iter().copied().cycle().take(count * 4).collect();
        Self::from_rgba(width, height, pixels)
    }

    /// Width in pixels
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 pixels, row-major
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Ordered frames making up one animation loop
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameSequence {
    frames: Vec<Frame>,
}

impl FrameSequence {
    /// Create a sequence from decoded frames
    #[must_use]
    pub const fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    /// One-frame sequence of solid colour
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero.
    pub fn placeholder(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, DomainError> {
        Ok(Self::new(vec![Frame::solid(width, height, rgba)?]))
    }

    /// Number of frames
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Check if the sequence has no frames
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame at `index`, if in range
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Iterate over the frames in order
    pub fn iter(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }
}

impl From<Vec<Frame>> for FrameSequence {
    fn from(frames: Vec<Frame>) -> Self {
        Self::new(frames)
    }
}
