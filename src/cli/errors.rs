use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[cfg(not(feature = "video"))]
    #[error("This build has no video support (enable the `video` feature)")]
    VideoUnsupported,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Report serialization error: {0}")]
    Report(#[from] serde_json::Error),

    #[error(transparent)]
    Library(#[from] detprep::Error),
}
