//! Near-black pixel classification.

/// Per-channel cutoff below which a channel counts as near black.
///
/// Applied independently to red, green and blue with strict `<`; a pixel with
/// any channel at or above the cutoff is kept. Alpha never participates.
pub(super) const NEAR_BLACK_THRESHOLD: u8 = 30;

/// RGBA value written over background pixels.
pub(super) const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

/// Whether a 4-byte RGBA chunk counts as background.
#[inline]
pub(super) fn is_background(pixel: &[u8]) -> bool {
    pixel[0] < NEAR_BLACK_THRESHOLD
        && pixel[1] < NEAR_BLACK_THRESHOLD
        && pixel[2] < NEAR_BLACK_THRESHOLD
}
