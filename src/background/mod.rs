//! Remove a near-black background from an image.
//!
//! One fused pass over an RGBA8 buffer: pixels whose red, green and blue are
//! all strictly below the threshold become fully transparent, everything else
//! passes through untouched. Output is always PNG.

mod classify;
mod error;
mod io;
mod process;
mod rewrite;

pub use error::BackgroundError;
pub use process::{RemovalStats, remove_black_background};
