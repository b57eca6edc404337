use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use tracing::debug;

use crate::core::raster::RasterImage;
use crate::error::{Error, Result};

fn pixel_type_for(channels: usize) -> Result<PixelType> {
    match channels {
        1 => Ok(PixelType::U8),
        2 => Ok(PixelType::U8x2),
        3 => Ok(PixelType::U8x3),
        4 => Ok(PixelType::U8x4),
        other => Err(Error::UnsupportedChannels { channels: other }),
    }
}

/// Resample `image` to exactly `target_cols x target_rows` with a bilinear kernel.
///
/// Channels are interpolated independently (alpha is not premultiplied).
/// A request for the current size returns an identical copy.
pub fn resize_bilinear(
    image: &RasterImage,
    target_cols: usize,
    target_rows: usize,
) -> Result<RasterImage> {
    if image.is_empty() {
        return Err(Error::EmptyImage {
            height: image.height(),
            width: image.width(),
        });
    }
    if target_cols == 0 || target_rows == 0 {
        return Err(Error::ZeroSize {
            size: target_cols.min(target_rows),
        });
    }
    if target_cols == image.width() && target_rows == image.height() {
        return Ok(image.clone());
    }

    let channels = image.channels();
    let pixel_type = pixel_type_for(channels)?;

    debug!(
        "Resampling {}x{} -> {}x{} ({} channels)",
        image.width(),
        image.height(),
        target_cols,
        target_rows,
        channels
    );

    let resize_options = ResizeOptions::new()
        .resize_alg(ResizeAlg::Convolution(FilterType::Bilinear))
        .use_alpha(false);
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        image.width() as u32,
        image.height() as u32,
        image.to_raw(),
        pixel_type,
    )?;
    let mut dst_image = Image::new(target_cols as u32, target_rows as u32, pixel_type);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    RasterImage::from_raw(target_cols, target_rows, channels, dst_image.into_vec())
}
