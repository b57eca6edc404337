//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, codec, resize and video backend errors, and provides
//! semantic variants for input validation and stream-open failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JPEG encoding error: {0}")]
    JpegEncode(#[from] jpeg_encoder::EncodingError),

    #[error("Image buffer error: {0}")]
    ImageBuffer(#[from] fast_image_resize::ImageBufferError),

    #[error("Resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("Pixel buffer shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[cfg(feature = "video")]
    #[error("OpenCV error: {0}")]
    OpenCv(#[from] opencv::Error),

    #[error("Image has no pixels: {height}x{width} (height x width)")]
    EmptyImage { height: usize, width: usize },

    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: usize },

    #[error(
        "Scaling {height}x{width} (height x width) to fit {target_size} leaves an axis with 0 pixels"
    )]
    DegenerateResize {
        height: usize,
        width: usize,
        target_size: usize,
    },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Unsupported channel count: {channels}")]
    UnsupportedChannels { channels: usize },

    #[error("Unsupported output format for {path:?} (expected .jpg, .jpeg or .png)")]
    UnsupportedFormat { path: PathBuf },

    #[error("Could not open video stream {path:?}: {reason}")]
    StreamOpen { path: PathBuf, reason: String },
}

impl Error {
    pub fn invalid_argument<V: std::fmt::Display>(arg: &'static str, value: V) -> Self {
        Error::InvalidArgument {
            arg,
            value: value.to_string(),
        }
    }
}
