use clap::builder::TypedValueParser as _;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use detprep::OutputFormat;
use detprep::core::params::{DEFAULT_INTERVAL, DEFAULT_TARGET_SIZE};

#[derive(Parser)]
#[command(name = "detprep", version, about = "Prepare images for object-detection datasets")]
pub struct CliArgs {
    /// Verbose (debug) logging; RUST_LOG overrides
    #[arg(long, global = true, default_value_t = false)]
    pub log: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resize images into a fixed square, keeping aspect ratio and padding with black
    Letterbox(LetterboxArgs),
    /// Extract sampled video frames as 001.jpg, 002.jpg, ...
    Frames(FramesArgs),
}

#[derive(Args)]
pub struct LetterboxArgs {
    /// Input image (single file mode)
    #[arg(short, long, conflicts_with = "input_dir")]
    pub input: Option<PathBuf>,

    /// Output image; its extension selects the encoder (single file mode)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory of .jpg/.jpeg/.png images (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Directory for letterboxed images, created if absent (batch mode)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Width and height of the square output
    #[arg(long, default_value_t = DEFAULT_TARGET_SIZE, value_parser = clap::value_parser!(u32).range(1..).map(|v| v as usize))]
    pub target_size: usize,

    /// Batch mode: process images in parallel
    #[arg(long, default_value_t = false)]
    pub parallel: bool,

    /// Batch mode: write a JSON report of per-image outcomes
    #[arg(long)]
    pub report: Option<PathBuf>,
}

#[derive(Args)]
pub struct FramesArgs {
    /// Input video file
    pub video_path: PathBuf,

    /// Output directory, created if absent
    pub output_dir: PathBuf,

    /// Keep one frame out of every N
    #[arg(long, default_value_t = DEFAULT_INTERVAL, value_parser = clap::value_parser!(u32).range(1..).map(|v| v as usize))]
    pub interval: usize,

    /// Output image format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Jpg)]
    pub format: OutputFormat,

    /// Output width; applied only together with --height
    #[arg(long)]
    pub width: Option<usize>,

    /// Output height; applied only together with --width
    #[arg(long)]
    pub height: Option<usize>,

    /// Write a JSON summary of the extraction
    #[arg(long)]
    pub report: Option<PathBuf>,
}
