//! Render surface port
//!
//! The drawable area provided by the windowing collaborator. The player only
//! ever clears it and draws one image at the origin.

use domain::Frame;
#[cfg(test)]
use mockall::automock;

/// Fixed-size drawable surface
#[cfg_attr(test, automock)]
pub trait RenderSurfacePort {
    /// Surface size in pixels (width, height)
    fn size(&self) -> (u32, u32);

    /// Remove everything drawn so far
    fn clear(&mut self);

    /// Draw `frame` with its top-left corner at (`x`, `y`)
    fn draw_image(&mut self, frame: &Frame, x: i64, y: i64);
}
