//! Shared types used across detprep.
//! Includes the encoded `OutputFormat`, the fixed `FrameSize` used by the frame
//! sampler, and the informational `VideoInfo` reported by video sources.
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Jpg,
    Png,
}

impl OutputFormat {
    /// File extension written for this format, without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Jpg => "jpg",
            OutputFormat::Png => "png",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(OutputFormat::Jpg),
            "png" => Some(OutputFormat::Png),
            _ => None,
        }
    }

    /// Format implied by the extension of `path`.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Exact output size for sampled frames. No aspect-ratio preservation.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: usize,
    pub height: usize,
}

impl FrameSize {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Only a fully specified pair is applied; a missing or zero side yields `None`.
    pub fn from_pair(width: Option<usize>, height: Option<usize>) -> Option<Self> {
        match (width, height) {
            (Some(w), Some(h)) if w > 0 && h > 0 => Some(Self::new(w, h)),
            _ => None,
        }
    }
}

impl std::fmt::Display for FrameSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Stream properties as reported by the decoder. Informational only.
#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct VideoInfo {
    pub total_frames: u64,
    pub fps: f64,
}

impl VideoInfo {
    /// Estimated duration in seconds, or `None` when the fps is zero or unavailable.
    pub fn duration_secs(&self) -> Option<f64> {
        if self.fps.is_finite() && self.fps > 0.0 {
            Some(self.total_frames as f64 / self.fps)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn format_from_path_is_case_insensitive() {
        assert_eq!(
            OutputFormat::from_path(&PathBuf::from("a/B.JPEG")),
            Some(OutputFormat::Jpg)
        );
        assert_eq!(
            OutputFormat::from_path(&PathBuf::from("frame.Png")),
            Some(OutputFormat::Png)
        );
        assert_eq!(OutputFormat::from_path(&PathBuf::from("clip.bmp")), None);
        assert_eq!(OutputFormat::from_path(&PathBuf::from("noext")), None);
    }

    #[test]
    fn frame_size_requires_both_sides() {
        assert_eq!(FrameSize::from_pair(Some(320), None), None);
        assert_eq!(FrameSize::from_pair(None, Some(240)), None);
        assert_eq!(FrameSize::from_pair(Some(0), Some(240)), None);
        assert_eq!(
            FrameSize::from_pair(Some(320), Some(240)),
            Some(FrameSize::new(320, 240))
        );
    }

    #[test]
    fn duration_guards_zero_fps() {
        let info = VideoInfo {
            total_frames: 300,
            fps: 0.0,
        };
        assert_eq!(info.duration_secs(), None);

        let info = VideoInfo {
            total_frames: 300,
            fps: f64::NAN,
        };
        assert_eq!(info.duration_secs(), None);

        let info = VideoInfo {
            total_frames: 300,
            fps: 30.0,
        };
        assert_eq!(info.duration_secs(), Some(10.0));
    }
}
