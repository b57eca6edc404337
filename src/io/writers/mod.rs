//! Encoders for prepared images. The output format is implied by the
//! destination extension; existing files are overwritten.
pub mod jpeg;
pub mod png;

use std::path::Path;

use crate::core::raster::RasterImage;
use crate::error::{Error, Result};
use crate::types::OutputFormat;

pub fn write_image_as(output: &Path, image: &RasterImage, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Jpg => jpeg::write_jpeg(output, image),
        OutputFormat::Png => png::write_png(output, image),
    }
}

pub fn write_image(output: &Path, image: &RasterImage) -> Result<()> {
    let format = OutputFormat::from_path(output).ok_or_else(|| Error::UnsupportedFormat {
        path: output.to_path_buf(),
    })?;
    write_image_as(output, image, format)
}
