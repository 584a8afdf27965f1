//! Pipeline driver: load, clear, save.

use std::path::Path;

use crate::background::error::BackgroundError;
use crate::background::{io, rewrite};

/// Summary of one background removal pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalStats {
    /// Output width in pixels, always equal to the input width.
    pub width: u32,
    /// Output height in pixels, always equal to the input height.
    pub height: u32,
    /// Pixels classified as background and cleared.
    pub cleared: usize,
}

/// Remove the near-black background from `input` and write a PNG to `output`.
///
/// The whole image is held in memory for the duration of the call. Nothing is
/// retried, and a failed save may leave a truncated file behind.
pub fn remove_black_background(
    input: &Path,
    output: &Path,
) -> Result<RemovalStats, BackgroundError> {
    let mut img = io::load_rgba(input)?;
    let cleared = rewrite::clear_background(&mut img);
    io::save_png(&img, output)?;

    Ok(RemovalStats {
        width: img.width(),
        height: img.height(),
        cleared,
    })
}
