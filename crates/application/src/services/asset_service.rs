//! Animation asset loading with placeholder fallback

use std::path::Path;

use domain::{FrameSequence, PLACEHOLDER_RGBA};
use tracing::{info, warn};

use crate::{error::ApplicationError, ports::FrameLoaderPort};

/// Load an animation, substituting a single grey frame on failure
///
/// The placeholder is `width` x `height`, normally the surface size.
///
/// # Errors
///
/// Only fails if the placeholder itself cannot be built (zero size).
pub fn load_frames_or_placeholder(
    loader: &dyn FrameLoaderPort,
    path: &Path,
    width: u32,
    height: u32,
) -> Result<FrameSequence, ApplicationError> {
    match loader.load(path) {
        Ok(frames) => {
            info!(path = %path.display(), frames = frames.len(), "Loaded animation");
            Ok(frames)
        },
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Using placeholder frame");
            Ok(FrameSequence::placeholder(width, height, PLACEHOLDER_RGBA)?)
        },
    }
}
