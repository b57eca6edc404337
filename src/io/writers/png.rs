use image::{ColorType, ImageFormat};
use std::path::Path;

use crate::core::raster::RasterImage;
use crate::error::{Error, Result};

pub fn write_png(output: &Path, image: &RasterImage) -> Result<()> {
    let color_type = match image.channels() {
        1 => ColorType::L8,
        2 => ColorType::La8,
        3 => ColorType::Rgb8,
        4 => ColorType::Rgba8,
        channels => return Err(Error::UnsupportedChannels { channels }),
    };
    image::save_buffer_with_format(
        output,
        &image.to_raw(),
        image.width() as u32,
        image.height() as u32,
        color_type,
        ImageFormat::Png,
    )?;
    Ok(())
}
