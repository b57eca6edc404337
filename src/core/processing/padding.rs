use ndarray::{Array3, s};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::raster::RasterImage;

/// Pixels added on each side of an image.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Padding {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

impl Padding {
    /// Split `leftover_rows` / `leftover_cols` in half, flooring the top/left share.
    /// An odd leftover pixel therefore lands on the bottom/right.
    pub fn split(leftover_rows: usize, leftover_cols: usize) -> Self {
        let top = leftover_rows / 2;
        let left = leftover_cols / 2;
        Self {
            top,
            bottom: leftover_rows - top,
            left,
            right: leftover_cols - left,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Padding::default()
    }
}

/// Extend `image` by `padding`, filling new samples with `value` in every channel.
pub fn pad_constant(image: &RasterImage, padding: Padding, value: u8) -> RasterImage {
    if padding.is_zero() {
        return image.clone();
    }

    let rows = image.height();
    let cols = image.width();
    let final_rows = rows + padding.top + padding.bottom;
    let final_cols = cols + padding.left + padding.right;

    debug!(
        "Adding padding: top={}, bottom={}, left={}, right={}; final {}x{}",
        padding.top, padding.bottom, padding.left, padding.right, final_cols, final_rows
    );

    let mut padded = Array3::from_elem((final_rows, final_cols, image.channels()), value);
    padded
        .slice_mut(s![
            padding.top..padding.top + rows,
            padding.left..padding.left + cols,
            ..
        ])
        .assign(image.pixels());
    RasterImage::new(padded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_puts_odd_pixel_bottom_right() {
        assert_eq!(
            Padding::split(5, 4),
            Padding {
                top: 2,
                bottom: 3,
                left: 2,
                right: 2
            }
        );
        assert!(Padding::split(0, 0).is_zero());
    }

    #[test]
    fn constant_fill_surrounds_original() {
        let src = RasterImage::filled(2, 1, 3, 200);
        let padding = Padding {
            top: 1,
            bottom: 2,
            left: 0,
            right: 1,
        };
        let out = pad_constant(&src, padding, 0);
        assert_eq!(out.height(), 4);
        assert_eq!(out.width(), 3);
        assert_eq!(out.channels(), 3);

        for row in 0..out.height() {
            for col in 0..out.width() {
                let inside = row == 1 && col < 2;
                let expected = if inside { 200 } else { 0 };
                assert!(
                    out.pixel(row, col).iter().all(|&v| v == expected),
                    "pixel ({row}, {col})"
                );
            }
        }
    }

    #[test]
    fn zero_padding_is_a_copy() {
        let src = RasterImage::filled(3, 3, 1, 7);
        assert_eq!(pad_constant(&src, Padding::default(), 0), src);
    }
}
