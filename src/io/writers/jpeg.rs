use jpeg_encoder::{ColorType, Encoder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::raster::RasterImage;
use crate::error::{Error, Result};

pub const JPEG_QUALITY: u8 = 95;

/// Encode `image` as baseline JPEG. 4-channel input is written without its alpha.
pub fn write_jpeg(output: &Path, image: &RasterImage) -> Result<()> {
    let color_type = match image.channels() {
        1 => ColorType::Luma,
        3 => ColorType::Rgb,
        4 => ColorType::Rgba,
        channels => return Err(Error::UnsupportedChannels { channels }),
    };
    let cols = u16::try_from(image.width())
        .map_err(|_| Error::invalid_argument("jpeg width", image.width()))?;
    let rows = u16::try_from(image.height())
        .map_err(|_| Error::invalid_argument("jpeg height", image.height()))?;

    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder = Encoder::new(&mut writer, JPEG_QUALITY);
    encoder.encode(&image.to_raw(), cols, rows, color_type)?;
    writer.flush()?;
    Ok(())
}
