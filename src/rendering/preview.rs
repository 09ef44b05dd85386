//! PNG preview of a quantized frame.

use std::path::Path;

use epd_dither::Image;
use image::RgbImage;

use crate::error::AppError;

/// Convert a quantized frame back into an `image` buffer
pub fn to_rgb_image(image: &Image) -> Result<RgbImage, AppError> {
    let width = image.width() as u32;
    let height = image.height() as u32;
    RgbImage::from_raw(width, height, image.to_rgb_bytes())
        .ok_or(AppError::UnsupportedDimensions { width, height })
}

/// Save the quantized frame as a PNG so the dithering can be inspected
/// without flashing a panel
pub fn save_preview(image: &Image, path: &Path) -> Result<(), AppError> {
    to_rgb_image(image)?.save(path)?;
    tracing::debug!(path = %path.display(), "Wrote preview");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use epd_dither::Rgb;

    #[test]
    fn test_to_rgb_image_preserves_pixels() {
        let image = Image::new(2, 1, vec![Rgb::new(191, 0, 0), Rgb::new(0, 0, 0)]).unwrap();
        let rgb = to_rgb_image(&image).unwrap();
        assert_eq!(rgb.dimensions(), (2, 1));
        assert_eq!(rgb.get_pixel(0, 0).0, [191, 0, 0]);
    }

    #[test]
    fn test_save_preview_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        let image = Image::filled(3, 2, Rgb::new(232, 126, 0)).unwrap();

        save_preview(&image, &path).unwrap();

        let loaded = image::open(&path).unwrap().into_rgb8();
        assert_eq!(loaded.dimensions(), (3, 2));
        assert!(loaded.pixels().all(|p| p.0 == [232, 126, 0]));
    }
}
