//! Frame loader port
//!
//! Decodes an animation asset into an ordered frame sequence.

use std::path::{Path, PathBuf};

use domain::FrameSequence;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

/// Asset decoding failures
#[derive(Debug, Error)]
pub enum AssetLoadError {
    /// Asset file does not exist
    #[error("Asset not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Asset could not be opened or decoded
    #[error("Failed to decode {}: {reason}", .path.display())]
    Decode { path: PathBuf, reason: String },

    /// Asset decoded but contained no frames
    #[error("Asset has no frames: {}", .0.display())]
    Empty(PathBuf),
}

/// Decoder for animation assets
#[cfg_attr(test, automock)]
pub trait FrameLoaderPort: Send + Sync {
    /// Decode every frame of the asset at `path`
    fn load(&self, path: &Path) -> Result<FrameSequence, AssetLoadError>;
}
