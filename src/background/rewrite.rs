//! Fused classify-and-clear pass over an RGBA8 buffer.

use image::RgbaImage;
use rayon::prelude::*;

use crate::background::classify::{TRANSPARENT, is_background};

const PARALLEL_PIXEL_THRESHOLD: usize = 32 * 1024;

/// Replace every near-black pixel with fully transparent `(0, 0, 0, 0)`.
///
/// All other pixels pass through bit-for-bit, alpha included. Returns the
/// number of pixels classified as background; a repeated pass reports the
/// same count it cleared the first time, since cleared pixels stay near
/// black.
///
/// Pixels are independent, so large images fan out on rayon. Both paths
/// produce identical output.
pub(super) fn clear_background(img: &mut RgbaImage) -> usize {
    let len = img.width() as usize * img.height() as usize;
    let raw: &mut [u8] = img;

    if len >= PARALLEL_PIXEL_THRESHOLD {
        raw.par_chunks_exact_mut(4)
            .map(|pixel| {
                if is_background(pixel) {
                    pixel.copy_from_slice(&TRANSPARENT);
                    1_usize
                } else {
                    0
                }
            })
            .sum()
    } else {
        let mut cleared = 0;
        for pixel in raw.chunks_exact_mut(4) {
            if is_background(pixel) {
                pixel.copy_from_slice(&TRANSPARENT);
                cleared += 1;
            }
        }
        cleared
    }
}
