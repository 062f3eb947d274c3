//! Widget surface configuration.

use serde::{Deserialize, Serialize};

/// Title and fixed size of the widget surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Window title
    #[serde(default = "default_title")]
    pub title: String,

    /// Width in pixels
    #[serde(default = "default_size")]
    pub width: u32,

    /// Height in pixels
    #[serde(default = "default_size")]
    pub height: u32,
}

fn default_title() -> String {
    "Academic Cube".to_string()
}

const fn default_size() -> u32 {
    domain::PLACEHOLDER_SIZE
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_size(),
            height: default_size(),
        }
    }
}
