use std::path::Path;

use epd_dither::Image;
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};

use crate::error::AppError;
use crate::models::DisplaySpec;

/// Whether `path` has one of `extensions` (case-insensitive, without dot)
pub fn is_supported<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|e| e.as_ref().eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Decode an image file and fit it to the display
pub fn load_image(path: &Path, spec: &DisplaySpec) -> Result<Image, AppError> {
    let decoded = image::open(path)?;
    tracing::debug!(
        path = %path.display(),
        width = decoded.width(),
        height = decoded.height(),
        "Decoded image"
    );
    fit_to_display(decoded, spec)
}

/// Decode an in-memory image and fit it to the display
pub fn load_image_from_memory(bytes: &[u8], spec: &DisplaySpec) -> Result<Image, AppError> {
    fit_to_display(image::load_from_memory(bytes)?, spec)
}

/// Drop alpha and stretch to exactly the display size.
///
/// The aspect ratio is not preserved: the source is scaled independently
/// on each axis, the way the panel images have always been prepared.
pub fn fit_to_display(decoded: DynamicImage, spec: &DisplaySpec) -> Result<Image, AppError> {
    let rgb = decoded.into_rgb8();
    let resized: RgbImage = if rgb.dimensions() == (spec.width, spec.height) {
        rgb
    } else {
        imageops::resize(&rgb, spec.width, spec.height, FilterType::CatmullRom)
    };

    Ok(Image::from_rgb_bytes(
        spec.width as usize,
        spec.height as usize,
        resized.as_raw(),
    )?)
}
