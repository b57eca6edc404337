//! High-level, ergonomic library API: letterbox single files or explicit batches
//! of inputs, and write sampled video frames into numbered image sequences.
//! Prefer these entrypoints over the low-level processing modules when
//! integrating detprep.
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::core::params::{LetterboxParams, SamplerParams};
use crate::core::processing::letterbox::resize_and_pad;
use crate::core::processing::sampler::FrameSampler;
use crate::core::raster::RasterImage;
use crate::error::Result;
use crate::io::{read_image, write_image, write_image_as};
use crate::types::{OutputFormat, VideoInfo};

const INPUT_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];
const PROGRESS_EVERY: usize = 100;

/// List the JPEG/PNG files directly inside `input_dir`, sorted by path.
pub fn collect_image_inputs(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();
    for entry in std::fs::read_dir(input_dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let accepted = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                INPUT_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            })
            .unwrap_or(false);
        if accepted {
            inputs.push(path);
        }
    }
    inputs.sort();
    Ok(inputs)
}

/// Letterbox one image file into `output`, re-encoded in the format its extension implies.
pub fn letterbox_file(input: &Path, output: &Path, target_size: usize) -> Result<()> {
    let image = read_image(input)?;
    let letterboxed = resize_and_pad(&image, target_size)?;
    write_image(output, &letterboxed)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItemStatus {
    Processed,
    Failed { reason: String },
}

/// Outcome of one batch item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(flatten)]
    pub status: ItemStatus,
}

impl ItemOutcome {
    pub fn is_processed(&self) -> bool {
        matches!(self.status, ItemStatus::Processed)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub processed: usize,
    pub errors: usize,
    pub outcomes: Vec<ItemOutcome>,
    pub finished_at: DateTime<Utc>,
}

impl BatchReport {
    fn from_outcomes(outcomes: Vec<ItemOutcome>) -> Self {
        let processed = outcomes.iter().filter(|o| o.is_processed()).count();
        Self {
            processed,
            errors: outcomes.len() - processed,
            outcomes,
            finished_at: Utc::now(),
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.outcomes.iter().filter(|o| !o.is_processed())
    }
}

fn letterbox_item(input: &Path, output_dir: &Path, target_size: usize) -> ItemOutcome {
    let Some(name) = input.file_name() else {
        warn!("Skipping {:?}: input path has no file name", input);
        return ItemOutcome {
            input: input.to_path_buf(),
            output: output_dir.to_path_buf(),
            status: ItemStatus::Failed {
                reason: format!("input path {:?} has no file name", input),
            },
        };
    };
    let output = output_dir.join(name);

    let status = match letterbox_file(input, &output, target_size) {
        Ok(()) => {
            info!("Processed: {:?} -> {:?}", input, output);
            ItemStatus::Processed
        }
        Err(e) => {
            warn!("Skipping {:?}: {}", input, e);
            ItemStatus::Failed {
                reason: e.to_string(),
            }
        }
    };

    ItemOutcome {
        input: input.to_path_buf(),
        output,
        status,
    }
}

/// Letterbox every input into `output_dir`, keeping each file name.
///
/// A failing item is recorded in the report and never stops the batch. Invalid
/// `params` or an uncreatable `output_dir` fail the whole call.
pub fn letterbox_batch(
    inputs: &[PathBuf],
    output_dir: &Path,
    params: &LetterboxParams,
) -> Result<BatchReport> {
    params.validate()?;
    std::fs::create_dir_all(output_dir)?;

    info!(
        "Letterboxing {} images to {}x{} into {:?}",
        inputs.len(),
        params.target_size,
        params.target_size,
        output_dir
    );

    let outcomes: Vec<ItemOutcome> = if params.parallel {
        inputs
            .par_iter()
            .map(|input| letterbox_item(input, output_dir, params.target_size))
            .collect()
    } else {
        inputs
            .iter()
            .map(|input| letterbox_item(input, output_dir, params.target_size))
            .collect()
    };

    let report = BatchReport::from_outcomes(outcomes);
    info!(
        "Batch complete: processed={}, errors={}",
        report.processed, report.errors
    );
    Ok(report)
}

/// Summary of one frame extraction run.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractReport {
    pub frames_read: usize,
    pub frames_saved: usize,
    pub format: OutputFormat,
    pub output_dir: PathBuf,
    pub video: Option<VideoInfo>,
}

/// Sample `frames` per `params` and write each selected frame as `output_dir/NNN.<ext>`.
///
/// A write failure stops extraction and is returned.
pub fn sample_frames_to_dir<I>(
    frames: I,
    output_dir: &Path,
    params: &SamplerParams,
    video: Option<VideoInfo>,
) -> Result<ExtractReport>
where
    I: Iterator<Item = RasterImage>,
{
    params.validate()?;
    std::fs::create_dir_all(output_dir)?;

    info!(
        "Sampling one frame in every {} into {:?}",
        params.interval, output_dir
    );

    let total_frames = video.map(|v| v.total_frames).unwrap_or(0);
    let mut sampler = FrameSampler::new(frames, params.interval, params.resize)?;
    for entry in sampler.by_ref() {
        let entry = entry?;
        let path = output_dir.join(entry.file_name(params.format));
        write_image_as(&path, &entry.image, params.format)?;

        if entry.ordinal % PROGRESS_EVERY == 0 {
            info!(
                "Saved {} images (source frame {}/{})",
                entry.ordinal, entry.source_index, total_frames
            );
        }
    }

    let report = ExtractReport {
        frames_read: sampler.frames_read(),
        frames_saved: sampler.frames_saved(),
        format: params.format,
        output_dir: output_dir.to_path_buf(),
        video,
    };
    info!(
        "Extraction complete: saved {} of {} frames to {:?}",
        report.frames_saved, report.frames_read, report.output_dir
    );
    Ok(report)
}

/// Open `video` and write its sampled frames into `output_dir`.
///
/// Fails with `Error::StreamOpen` before touching `output_dir` when the file
/// cannot be opened. The decoder is released on every return path.
#[cfg(feature = "video")]
pub fn extract_video_frames(
    video: &Path,
    output_dir: &Path,
    params: &SamplerParams,
) -> Result<ExtractReport> {
    params.validate()?;
    let frames = crate::io::VideoFrames::open(video)?;
    let video_info = frames.info();

    match video_info.duration_secs() {
        Some(duration) => info!(
            "Video info: {} frames, {:.2} fps, duration {:.2}s",
            video_info.total_frames, video_info.fps, duration
        ),
        None => info!(
            "Video info: {} frames, fps unavailable",
            video_info.total_frames
        ),
    }

    sample_frames_to_dir(frames, output_dir, params, Some(video_info))
}
