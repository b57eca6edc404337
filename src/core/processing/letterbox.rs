//! Aspect-preserving resize into a fixed square followed by constant (black) padding.
//!
//! Scaled sizes are computed with a truncating float-to-int cast, not rounding.
//! This is observable: a 127x256 (height x width) source at 640 scales by 2.5 to
//! 317.5 rows, which becomes 317 and leaves 323 rows of padding split 161/162.
//! Floating-point error can also leave the long axis one pixel short of the
//! target (77x10 at 640 yields 639 rows), in which case that pixel is padded too.
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::processing::padding::{Padding, pad_constant};
use crate::core::processing::resize::resize_bilinear;
use crate::core::raster::RasterImage;
use crate::error::{Error, Result};

/// Fill value for every channel of the padded border.
pub const PAD_VALUE: u8 = 0;

/// Resize and padding derived from `(source_height, source_width, target_size)`.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct LetterboxGeometry {
    pub scale: f64,
    pub new_height: usize,
    pub new_width: usize,
    pub padding: Padding,
}

impl LetterboxGeometry {
    pub fn compute(source_height: usize, source_width: usize, target_size: usize) -> Result<Self> {
        if source_height == 0 || source_width == 0 {
            return Err(Error::EmptyImage {
                height: source_height,
                width: source_width,
            });
        }
        if target_size == 0 {
            return Err(Error::ZeroSize { size: target_size });
        }

        let target = target_size as f64;
        let scale = (target / source_height as f64).min(target / source_width as f64);
        let new_height = (source_height as f64 * scale) as usize;
        let new_width = (source_width as f64 * scale) as usize;

        if new_height == 0 || new_width == 0 {
            return Err(Error::DegenerateResize {
                height: source_height,
                width: source_width,
                target_size,
            });
        }

        let padding = Padding::split(target_size - new_height, target_size - new_width);

        Ok(Self {
            scale,
            new_height,
            new_width,
            padding,
        })
    }

    pub fn output_height(&self) -> usize {
        self.new_height + self.padding.top + self.padding.bottom
    }

    pub fn output_width(&self) -> usize {
        self.new_width + self.padding.left + self.padding.right
    }
}

/// Letterbox `image` into a `target_size x target_size` image with the same channel count.
pub fn resize_and_pad(image: &RasterImage, target_size: usize) -> Result<RasterImage> {
    let geometry = LetterboxGeometry::compute(image.height(), image.width(), target_size)?;

    debug!(
        "Letterbox {}x{} -> {}x{} (scale {:.6}), padding {:?}",
        image.width(),
        image.height(),
        geometry.new_width,
        geometry.new_height,
        geometry.scale,
        geometry.padding
    );

    let resized = resize_bilinear(image, geometry.new_width, geometry.new_height)?;
    Ok(pad_constant(&resized, geometry.padding, PAD_VALUE))
}
