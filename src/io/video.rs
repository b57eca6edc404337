use std::path::{Path, PathBuf};

use opencv::{core, imgproc, prelude::*, videoio};
use tracing::{debug, warn};

use crate::core::raster::RasterImage;
use crate::error::{Error, Result};
use crate::types::VideoInfo;

/// Decoded frames of a video file, in stream order.
///
/// The capture is released when this value is dropped. The sequence ends at the
/// first read that fails or returns no frame; a failure is logged but not
/// distinguished from a clean end of stream.
pub struct VideoFrames {
    capture: videoio::VideoCapture,
    path: PathBuf,
    info: VideoInfo,
    finished: bool,
}

impl VideoFrames {
    pub fn open(path: &Path) -> Result<Self> {
        let open_error = |reason: String| Error::StreamOpen {
            path: path.to_path_buf(),
            reason,
        };

        let path_str = path
            .to_str()
            .ok_or_else(|| open_error("path is not valid UTF-8".to_string()))?;

        // CAP_ANY lets OpenCV pick the platform backend
        let capture = videoio::VideoCapture::from_file(path_str, videoio::CAP_ANY)
            .map_err(|e| open_error(e.to_string()))?;

        if !capture.is_opened().unwrap_or(false) {
            return Err(open_error("container could not be opened".to_string()));
        }

        let total_frames = capture
            .get(videoio::CAP_PROP_FRAME_COUNT)
            .unwrap_or(0.0)
            .max(0.0) as u64;
        let fps = capture.get(videoio::CAP_PROP_FPS).unwrap_or(0.0);

        debug!(
            "Opened video {:?}: {} frames at {:.2} fps",
            path, total_frames, fps
        );

        Ok(Self {
            capture,
            path: path.to_path_buf(),
            info: VideoInfo { total_frames, fps },
            finished: false,
        })
    }

    pub fn info(&self) -> VideoInfo {
        self.info
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_frame(&mut self) -> Result<Option<RasterImage>> {
        let mut frame = Mat::default();
        if !self.capture.read(&mut frame)? || frame.empty() {
            return Ok(None);
        }
        mat_to_raster(&frame).map(Some)
    }
}

impl Iterator for VideoFrames {
    type Item = RasterImage;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.read_frame() {
            Ok(Some(frame)) => Some(frame),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                warn!("Stopping at unreadable frame in {:?}: {}", self.path, e);
                self.finished = true;
                None
            }
        }
    }
}

impl Drop for VideoFrames {
    fn drop(&mut self) {
        if let Err(e) = self.capture.release() {
            warn!("Failed to release video capture for {:?}: {}", self.path, e);
        }
    }
}

/// Convert an OpenCV BGR(A)/gray frame into an RGB(A)/gray raster.
fn mat_to_raster(frame: &Mat) -> Result<RasterImage> {
    let channels = frame.channels();
    let code = match channels {
        1 => None,
        3 => Some(imgproc::COLOR_BGR2RGB),
        4 => Some(imgproc::COLOR_BGRA2RGBA),
        other => {
            return Err(Error::UnsupportedChannels {
                channels: other.max(0) as usize,
            });
        }
    };

    let converted = match code {
        Some(code) => {
            let mut out = Mat::default();
            imgproc::cvt_color(
                frame,
                &mut out,
                code,
                0,
                core::AlgorithmHint::ALGO_HINT_DEFAULT,
            )?;
            out
        }
        None => frame.try_clone()?,
    };

    let data = if converted.is_continuous() {
        converted.data_bytes()?.to_vec()
    } else {
        converted.try_clone()?.data_bytes()?.to_vec()
    };

    RasterImage::from_raw(
        converted.cols() as usize,
        converted.rows() as usize,
        channels as usize,
        data,
    )
}
