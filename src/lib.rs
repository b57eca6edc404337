#![doc = r#"
detprep — image preparation for object-detection datasets.

This crate provides two small, stateless building blocks and a typed API around them:

- **Letterboxing**: resize an image into a fixed square while keeping its aspect
  ratio, then pad the remainder with black ([`resize_and_pad`]).
- **Frame sampling**: turn a video into a gap-free numbered image sequence
  (`001.jpg`, `002.jpg`, ...), keeping one frame in every `interval`
  ([`FrameSampler`], [`extract_video_frames`]).

Both power the `detprep` CLI and can be embedded in your own Rust applications.

Requirements
------------
- OpenCV development headers and runtime for the `video` feature (enabled by default).
- Rust 2024 edition toolchain.

Letterbox one image in memory
-----------------------------
```rust
use detprep::{RasterImage, resize_and_pad};

fn main() -> detprep::Result<()> {
    // 100 rows x 50 columns, RGB
    let image = RasterImage::filled(50, 100, 3, 128);
    let square = resize_and_pad(&image, 640)?;
    assert_eq!((square.width(), square.height()), (640, 640));
    Ok(())
}
```

Batch letterboxing
------------------
Inputs are an explicit list; a failing item is recorded and the batch carries on.

```rust,no_run
use std::path::Path;
use detprep::{LetterboxParams, collect_image_inputs, letterbox_batch};

fn main() -> detprep::Result<()> {
    let inputs = collect_image_inputs(Path::new("/data/raw"))?;
    let report = letterbox_batch(&inputs, Path::new("/data/calib"), &LetterboxParams::default())?;
    for failure in report.failures() {
        eprintln!("{:?}: {:?}", failure.input, failure.status);
    }
    Ok(())
}
```

Sampling frames
---------------
Any iterator of decoded frames can be sampled, which keeps tests free of a video backend.

```rust
use detprep::{FrameSampler, RasterImage};

fn main() -> detprep::Result<()> {
    let frames = (0..10).map(|_| RasterImage::filled(4, 4, 3, 0));
    let picked: Vec<usize> = FrameSampler::new(frames, 3, None)?
        .map(|entry| entry.map(|e| e.source_index))
        .collect::<detprep::Result<_>>()?;
    assert_eq!(picked, vec![0, 3, 6, 9]);
    Ok(())
}
```

Error handling
--------------
All public functions return `detprep::Result<T>`; match on `detprep::Error` to handle
specific cases.

```rust,no_run
use std::path::Path;
use detprep::{Error, letterbox_file};

fn main() {
    match letterbox_file(Path::new("in.png"), Path::new("out.png"), 640) {
        Ok(()) => {}
        Err(Error::Image(e)) => eprintln!("decode/encode failed: {e}"),
        Err(Error::EmptyImage { .. }) => eprintln!("empty image"),
        Err(other) => eprintln!("other error: {other}"),
    }
}
```

Feature flags
-------------
- `video`: OpenCV-backed video decoding ([`io::video`], [`extract_video_frames`]).
- `full`: enables every feature.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::{LetterboxParams, SamplerParams};
pub use crate::core::processing::letterbox::{LetterboxGeometry, resize_and_pad};
pub use crate::core::processing::padding::Padding;
pub use crate::core::processing::sampler::{FrameEntry, FrameSampler};
pub use crate::core::raster::RasterImage;
pub use error::{Error, Result};
pub use types::{FrameSize, OutputFormat, VideoInfo};

#[cfg(feature = "video")]
pub use io::VideoFrames;

// High-level API re-exports
pub use api::{
    BatchReport, ExtractReport, ItemOutcome, ItemStatus, collect_image_inputs, letterbox_batch,
    letterbox_file, sample_frames_to_dir,
};

#[cfg(feature = "video")]
pub use api::extract_video_frames;
