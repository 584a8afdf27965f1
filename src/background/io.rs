//! Image loading and saving.

use std::path::Path;

use image::{ImageError, ImageFormat, RgbaImage};

use crate::background::error::BackgroundError;

/// Load an image and normalize it to RGBA8.
///
/// Sources without an alpha channel come back fully opaque.
pub(super) fn load_rgba(path: &Path) -> Result<RgbaImage, BackgroundError> {
    if !path.exists() {
        return Err(BackgroundError::NotFound(path.to_path_buf()));
    }

    let img = image::open(path).map_err(|e| match e {
        ImageError::IoError(io) => BackgroundError::Read(path.to_path_buf(), io),
        other => BackgroundError::Decode(path.to_path_buf(), other),
    })?;

    Ok(img.to_rgba8())
}

/// Write the buffer as PNG, overwriting any existing file.
///
/// The parent directory must already exist; a missing or unwritable
/// destination surfaces as [`BackgroundError::Write`].
pub(super) fn save_png(img: &RgbaImage, path: &Path) -> Result<(), BackgroundError> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| BackgroundError::Write(path.to_path_buf(), e))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use tempfile::TempDir;

    use super::{load_rgba, save_png};
    use crate::background::error::BackgroundError;

    #[test]
    fn test_load_missing_input() {
        let dir = TempDir::new().unwrap();
        let err = load_rgba(&dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, BackgroundError::NotFound(_)));
    }

    #[test]
    fn test_load_rejects_non_image_data() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("junk.png");
        fs::write(&path, b"not an image").unwrap();

        let err = load_rgba(&path).unwrap_err();
        assert!(matches!(err, BackgroundError::Decode(_, _)));
    }

    #[test]
    fn test_load_normalizes_rgb_to_rgba() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("opaque.png");
        RgbImage::from_pixel(2, 1, Rgb([200, 50, 50]))
            .save(&path)
            .unwrap();

        let img = load_rgba(&path).unwrap();

        assert_eq!(img.dimensions(), (2, 1));
        assert_eq!(img.get_pixel(0, 0), &Rgba([200, 50, 50, 255]));
    }

    #[test]
    fn test_save_requires_existing_parent() {
        let dir = TempDir::new().unwrap();
        let img = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 0]));

        let err = save_png(&img, &dir.path().join("missing/out.png")).unwrap_err();
        assert!(matches!(err, BackgroundError::Write(_, _)));
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.png");
        fs::write(&path, b"stale content").unwrap();

        let img = RgbaImage::from_pixel(1, 1, Rgba([200, 50, 50, 77]));
        save_png(&img, &path).unwrap();

        let reloaded = load_rgba(&path).unwrap();
        assert_eq!(reloaded.get_pixel(0, 0), &Rgba([200, 50, 50, 77]));
    }
}
