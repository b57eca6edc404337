//! I/O layer: image decoding (`reader`), JPEG/PNG encoders (`writers`), and,
//! with the `video` feature, the OpenCV-backed frame source (`video`).
pub mod reader;
pub use reader::read_image;

#[cfg(feature = "video")]
pub mod video;
#[cfg(feature = "video")]
pub use video::VideoFrames;

pub mod writers;
pub use writers::{write_image, write_image_as};
