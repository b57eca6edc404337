use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use detprep::{FrameSize, LetterboxParams, SamplerParams};
use detprep::{collect_image_inputs, letterbox_batch, letterbox_file};

use super::args::{CliArgs, Command, FramesArgs, LetterboxArgs};
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn write_report<T: Serialize>(path: &Path, report: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    info!("Report written to {:?}", path);
    Ok(())
}

fn run_letterbox(args: LetterboxArgs) -> Result<(), AppError> {
    let params = LetterboxParams {
        target_size: args.target_size,
        parallel: args.parallel,
    };
    params.validate()?;

    let batch_mode = args.input_dir.is_some();

    if batch_mode {
        let input_dir = args.input_dir.ok_or(AppError::MissingArgument {
            arg: "--input-dir".to_string(),
        })?;
        let output_dir = args.output_dir.ok_or(AppError::MissingArgument {
            arg: "--output-dir".to_string(),
        })?;

        info!("Starting batch letterboxing from directory: {:?}", input_dir);
        let inputs = collect_image_inputs(&input_dir)?;
        if inputs.is_empty() {
            warn!("No .jpg/.jpeg/.png files found in {:?}", input_dir);
        }

        let report = letterbox_batch(&inputs, &output_dir, &params)?;
        for failure in report.failures() {
            warn!("Failed: {:?}", failure.input);
        }
        info!("Processed: {}", report.processed);
        info!("Errors: {}", report.errors);

        if let Some(path) = args.report.as_deref() {
            write_report(path, &report)?;
        }
    } else {
        let input = args.input.ok_or(AppError::MissingArgument {
            arg: "--input or --input-dir".to_string(),
        })?;
        let output = args.output.ok_or(AppError::MissingArgument {
            arg: "--output".to_string(),
        })?;
        if args.report.is_some() {
            warn!("--report only applies to batch mode; ignoring");
        }

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        letterbox_file(&input, &output, params.target_size)?;
        info!("Processed: {:?} -> {:?}", input, output);
    }

    Ok(())
}

fn run_frames(args: FramesArgs) -> Result<(), AppError> {
    let resize = FrameSize::from_pair(args.width, args.height);
    if resize.is_none() && (args.width.is_some() || args.height.is_some()) {
        warn!("--width and --height must be given together (and non-zero); keeping original frame size");
    }

    let params = SamplerParams {
        interval: args.interval,
        format: args.format,
        resize,
    };
    params.validate()?;

    extract(&args, &params)
}

#[cfg(feature = "video")]
fn extract(args: &FramesArgs, params: &SamplerParams) -> Result<(), AppError> {
    info!(
        "Extracting frames from {:?} into {:?}",
        args.video_path, args.output_dir
    );
    let report = detprep::extract_video_frames(&args.video_path, &args.output_dir, params)?;
    if let Some(path) = args.report.as_deref() {
        write_report(path, &report)?;
    }
    Ok(())
}

#[cfg(not(feature = "video"))]
fn extract(_args: &FramesArgs, _params: &SamplerParams) -> Result<(), AppError> {
    Err(AppError::VideoUnsupported)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    match args.command {
        Command::Letterbox(letterbox) => run_letterbox(letterbox)?,
        Command::Frames(frames) => run_frames(frames)?,
    }

    Ok(())
}
