//! Error types for command building and image resolution

use thiserror::Error;

/// Image resolution error
///
/// Raised by the image source boundary; surfaces at `build()` of the
/// job that owns the pending image.
#[derive(Debug, Error)]
pub enum ImageError {
    /// Remote image fetch failed
    #[error("Image fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Local image read failed
    #[error("Image read failed: {0}")]
    Io(#[from] std::io::Error),

    /// Data URL without a payload separator
    #[error("Malformed data URL: missing ',' separator")]
    InvalidDataUrl,
}

/// Build error types
#[derive(Debug, Error)]
pub enum BuildError {
    /// A field failed its declared constraint
    #[error("Validation failed: {0}")]
    Validation(String),

    /// An image source could not be resolved to a payload
    #[error("{0}")]
    Image(#[from] ImageError),

    /// An image resolution task panicked or was cancelled
    #[error("Image task aborted: {0}")]
    ImageTask(#[from] tokio::task::JoinError),
}

/// Result type for builder operations
pub type BuildResult<T> = Result<T, BuildError>;
