use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageReader};

use crate::core::raster::RasterImage;
use crate::error::Result;

/// Decode a JPEG or PNG file. The decoder is chosen from the file contents,
/// so a PNG saved under a `.jpg` name still decodes.
///
/// Grayscale sources stay single-channel, sources with alpha become RGBA,
/// everything else is RGB.
pub fn read_image(path: &Path) -> Result<RasterImage> {
    let decoded = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    to_raster(decoded)
}

pub fn to_raster(decoded: DynamicImage) -> Result<RasterImage> {
    let color = decoded.color();
    let (width, height) = decoded.dimensions();
    let (width, height) = (width as usize, height as usize);

    if color.has_alpha() {
        RasterImage::from_raw(width, height, 4, decoded.into_rgba8().into_raw())
    } else if color.channel_count() == 1 {
        RasterImage::from_raw(width, height, 1, decoded.into_luma8().into_raw())
    } else {
        RasterImage::from_raw(width, height, 3, decoded.into_rgb8().into_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn channel_count_follows_source() {
        let gray = to_raster(DynamicImage::ImageLuma8(GrayImage::from_pixel(3, 2, Luma([9]))))
            .unwrap();
        assert_eq!((gray.width(), gray.height(), gray.channels()), (3, 2, 1));

        let rgb = to_raster(DynamicImage::ImageRgb8(RgbImage::from_pixel(
            3,
            2,
            Rgb([1, 2, 3]),
        )))
        .unwrap();
        assert_eq!(rgb.channels(), 3);
        assert_eq!(rgb.pixel(1, 2).to_vec(), vec![1, 2, 3]);

        let rgba = to_raster(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            1,
            1,
            Rgba([1, 2, 3, 4]),
        )))
        .unwrap();
        assert_eq!(rgba.channels(), 4);
    }
}
