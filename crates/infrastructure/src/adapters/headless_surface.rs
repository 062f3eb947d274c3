//! Off-screen render surface
//!
//! Keeps the widget's canvas as an RGBA buffer. Drawing composites a frame
//! onto the canvas with alpha blending; pixels outside the canvas are
//! clipped.

use application::ports::RenderSurfacePort;
use domain::Frame;
use image::{Rgba, RgbaImage, imageops};
use tracing::{debug, trace};

/// RGBA canvas implementing [`RenderSurfacePort`]
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    title: String,
    canvas: RgbaImage,
    draws: u64,
}

impl HeadlessSurface {
    /// Create a transparent canvas of `width` x `height`
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        let title = title.into();
        debug!(title = %title, width, height, "Created headless surface");
        Self {
            title,
            canvas: RgbaImage::new(width, height),
            draws: 0,
        }
    }
}

#[cfg(test)]
impl HeadlessSurface {
    const fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    const fn draw_count(&self) -> u64 {
        self.draws
    }
}

impl RenderSurfacePort for HeadlessSurface {
    fn size(&self) -> (u32, u32) {
        self.canvas.dimensions()
    }

    fn clear(&mut self) {
        for pixel in self.canvas.pixels_mut() {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }

    fn draw_image(&mut self, frame: &Frame, x: i64, y: i64) {
        let Some(image) =
            RgbaImage::from_raw(frame.width(), frame.height(), frame.pixels().to_vec())
        else {
            trace!(?frame, "Frame buffer does not match its dimensions");
            return;
        };
        imageops::overlay(&mut self.canvas, &image, x, y);
        self.draws += 1;
        trace!(surface = %self.title, draws = self.draws, "Frame presented");
    }
}
