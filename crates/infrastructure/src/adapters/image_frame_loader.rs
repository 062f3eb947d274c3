//! Image frame loader - Implements FrameLoaderPort using the `image` crate
//!
//! Animated GIFs are decoded frame by frame with each frame composited onto
//! the full logical screen. Any other format `image` understands is loaded
//! as a single-frame sequence.

use std::{
    fs::File,
    io::{self, BufReader},
    path::Path,
};

use application::ports::{AssetLoadError, FrameLoaderPort};
use domain::{Frame, FrameSequence};
use image::{AnimationDecoder, ImageError, RgbaImage, codecs::gif::GifDecoder};
use tracing::{debug, instrument};

/// Decodes animation assets from disk
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageFrameLoader;

impl ImageFrameLoader {
    /// Create a new loader
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn load_gif(path: &Path) -> Result<Vec<RgbaImage>, AssetLoadError> {
        let file = File::open(path).map_err(|e| open_error(path, &e))?;
        let decoder =
            GifDecoder::new(BufReader::new(file)).map_err(|e| decode_error(path, &e))?;
        let frames = decoder
            .into_frames()
            .collect_frames()
            .map_err(|e| decode_error(path, &e))?;
        Ok(frames.into_iter().map(image::Frame::into_buffer).collect())
    }

    fn load_still(path: &Path) -> Result<Vec<RgbaImage>, AssetLoadError> {
        let image = image::open(path).map_err(|e| match e {
            ImageError::IoError(io) => open_error(path, &io),
            other => decode_error(path, &other),
        })?;
        Ok(vec![image.to_rgba8()])
    }
}

impl FrameLoaderPort for ImageFrameLoader {
    #[instrument(skip(self), fields(path = %path.display()))]
    fn load(&self, path: &Path) -> Result<FrameSequence, AssetLoadError> {
        let buffers = if is_gif(path) {
            Self::load_gif(path)?
        } else {
            Self::load_still(path)?
        };

        if buffers.is_empty() {
            return Err(AssetLoadError::Empty(path.to_path_buf()));
        }

        let frames = buffers
            .into_iter()
            .map(|buffer| {
                let (width, height) = buffer.dimensions();
                Frame::from_rgba(width, height, buffer.into_raw())
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| decode_error(path, &e))?;

        debug!(frames = frames.len(), "Loaded animation");
        Ok(FrameSequence::new(frames))
    }
}

fn is_gif(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gif"))
}

fn open_error(path: &Path, err: &io::Error) -> AssetLoadError {
    if err.kind() == io::ErrorKind::NotFound {
        AssetLoadError::NotFound(path.to_path_buf())
    } else {
        decode_error(path, err)
    }
}

fn decode_error(path: &Path, err: &dyn std::fmt::Display) -> AssetLoadError {
    AssetLoadError::Decode {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}
