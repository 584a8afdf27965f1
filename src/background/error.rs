//! Typed errors for the background removal pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced while loading, rewriting, or saving an image.
///
/// Every variant carries the path it failed on; callers propagate these
/// straight to the process boundary, there is no local recovery.
#[derive(Debug, Error)]
pub enum BackgroundError {
    /// Input path does not exist.
    #[error("input image not found: `{0}`")]
    NotFound(PathBuf),

    /// Input path exists but could not be read.
    #[error("failed to read `{0}`")]
    Read(PathBuf, #[source] std::io::Error),

    /// Input data is not a valid or supported image format.
    #[error("failed to decode `{0}`")]
    Decode(PathBuf, #[source] image::ImageError),

    /// Output could not be encoded or written.
    #[error("failed to write `{0}`")]
    Write(PathBuf, #[source] image::ImageError),
}
