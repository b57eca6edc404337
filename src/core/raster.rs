use ndarray::{Array3, ArrayView1};

use crate::error::{Error, Result};

/// Decoded pixel grid with 8-bit samples, stored as `(rows, cols, channels)`.
///
/// Transformations never mutate a `RasterImage`; they build a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pixels: Array3<u8>,
}

impl RasterImage {
    pub fn new(pixels: Array3<u8>) -> Self {
        Self { pixels }
    }

    /// Build from interleaved row-major bytes (`width * height * channels` long).
    pub fn from_raw(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        if channels == 0 {
            return Err(Error::UnsupportedChannels { channels });
        }
        let pixels = Array3::from_shape_vec((height, width, channels), data)?;
        Ok(Self { pixels })
    }

    /// Image of the given size with every sample set to `value`.
    pub fn filled(width: usize, height: usize, channels: usize, value: u8) -> Self {
        Self {
            pixels: Array3::from_elem((height, width, channels), value),
        }
    }

    pub fn height(&self) -> usize {
        self.pixels.dim().0
    }

    pub fn width(&self) -> usize {
        self.pixels.dim().1
    }

    pub fn channels(&self) -> usize {
        self.pixels.dim().2
    }

    pub fn is_empty(&self) -> bool {
        self.height() == 0 || self.width() == 0
    }

    pub fn pixels(&self) -> &Array3<u8> {
        &self.pixels
    }

    /// Samples of the pixel at `(row, col)`.
    pub fn pixel(&self, row: usize, col: usize) -> ArrayView1<'_, u8> {
        self.pixels.slice(ndarray::s![row, col, ..])
    }

    /// Interleaved row-major copy of the samples.
    pub fn to_raw(&self) -> Vec<u8> {
        match self.pixels.as_slice() {
            Some(slice) => slice.to_vec(),
            None => self.pixels.iter().copied().collect(),
        }
    }

    pub fn into_raw(self) -> Vec<u8> {
        if self.pixels.is_standard_layout() {
            self.pixels.into_raw_vec()
        } else {
            self.pixels.iter().copied().collect()
        }
    }
}
