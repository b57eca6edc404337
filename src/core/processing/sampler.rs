use tracing::debug;

use crate::core::processing::resize::resize_bilinear;
use crate::core::raster::RasterImage;
use crate::error::{Error, Result};
use crate::types::{FrameSize, OutputFormat};

/// A selected frame and its position in the output sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameEntry {
    /// 1-based, consecutive across selected frames only
    pub ordinal: usize,
    /// 0-based index of the frame in the decoded stream
    pub source_index: usize,
    pub image: RasterImage,
}

impl FrameEntry {
    /// `001.jpg`, `002.jpg`, ...; ordinals past 999 simply grow wider.
    pub fn file_name(&self, format: OutputFormat) -> String {
        format!("{:03}.{}", self.ordinal, format.extension())
    }
}

/// Lazily selects every `interval`-th frame from `frames`, starting with the first.
///
/// The source ends the sequence by returning `None`; the sampler never pulls
/// further frames after that.
pub struct FrameSampler<I> {
    frames: I,
    interval: usize,
    resize: Option<FrameSize>,
    frame_count: usize,
    saved_count: usize,
    exhausted: bool,
}

impl<I> FrameSampler<I>
where
    I: Iterator<Item = RasterImage>,
{
    pub fn new(frames: I, interval: usize, resize: Option<FrameSize>) -> Result<Self> {
        if interval == 0 {
            return Err(Error::invalid_argument("interval", interval));
        }
        if let Some(size) = resize {
            if size.width == 0 || size.height == 0 {
                return Err(Error::invalid_argument("resize", size));
            }
        }
        Ok(Self {
            frames,
            interval,
            resize,
            frame_count: 0,
            saved_count: 0,
            exhausted: false,
        })
    }

    /// Decoded frames consumed so far, selected or not.
    pub fn frames_read(&self) -> usize {
        self.frame_count
    }

    pub fn frames_saved(&self) -> usize {
        self.saved_count
    }
}

impl<I> Iterator for FrameSampler<I>
where
    I: Iterator<Item = RasterImage>,
{
    type Item = Result<FrameEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        loop {
            let Some(frame) = self.frames.next() else {
                self.exhausted = true;
                return None;
            };
            let source_index = self.frame_count;
            self.frame_count += 1;

            if source_index % self.interval != 0 {
                continue;
            }

            let image = match self.resize {
                Some(size) => match resize_bilinear(&frame, size.width, size.height) {
                    Ok(resized) => resized,
                    Err(e) => return Some(Err(e)),
                },
                None => frame,
            };

            self.saved_count += 1;
            debug!(
                "Selected source frame {} as ordinal {}",
                source_index, self.saved_count
            );
            return Some(Ok(FrameEntry {
                ordinal: self.saved_count,
                source_index,
                image,
            }));
        }
    }
}
