use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{FrameSize, OutputFormat};

pub const DEFAULT_TARGET_SIZE: usize = 640;
pub const DEFAULT_INTERVAL: usize = 1;

/// Letterbox parameters suitable for config files and presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LetterboxParams {
    /// Side length of the square output in pixels
    pub target_size: usize,
    /// Process batch items on the rayon pool
    pub parallel: bool,
}

impl Default for LetterboxParams {
    fn default() -> Self {
        Self {
            target_size: DEFAULT_TARGET_SIZE,
            parallel: false,
        }
    }
}

impl LetterboxParams {
    pub fn validate(&self) -> Result<()> {
        if self.target_size == 0 {
            return Err(Error::ZeroSize {
                size: self.target_size,
            });
        }
        Ok(())
    }
}

/// Frame sampling parameters suitable for config files and presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerParams {
    /// Keep one frame out of every `interval` decoded frames
    pub interval: usize,
    pub format: OutputFormat,
    /// Exact output size; None keeps the decoded size
    pub resize: Option<FrameSize>,
}

impl Default for SamplerParams {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            format: OutputFormat::Jpg,
            resize: None,
        }
    }
}

impl SamplerParams {
    pub fn validate(&self) -> Result<()> {
        if self.interval == 0 {
            return Err(Error::invalid_argument("interval", self.interval));
        }
        if let Some(size) = self.resize {
            if size.width == 0 || size.height == 0 {
                return Err(Error::invalid_argument("resize", size));
            }
        }
        Ok(())
    }
}
