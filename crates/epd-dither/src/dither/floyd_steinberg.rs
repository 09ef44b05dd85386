//! Floyd-Steinberg error diffusion dithering.
//!
//! Classic left-to-right scan on every row. No serpentine pass: the packed
//! output must be reproducible byte for byte by existing consumers.

use crate::image::Image;
use crate::palette::Palette;

use super::{diffuse_with_kernel, FLOYD_STEINBERG};

/// Quantize `image` in place to `palette` with Floyd-Steinberg diffusion.
///
/// Weights: 7/16 right, 3/16 bottom-left, 5/16 bottom, 1/16 bottom-right.
/// Neighbors outside the image are skipped. Returns the palette index of
/// every pixel in row-major order.
///
/// # Example
///
/// ```
/// use epd_dither::{diffuse, Image, Palette, Rgb};
///
/// let palette = Palette::acep_7color();
/// let mut image = Image::filled(4, 4, Rgb::new(128, 128, 128)).unwrap();
/// let indices = diffuse(&mut image, &palette);
///
/// assert_eq!(indices.len(), 16);
/// assert!(image.pixels().iter().all(|&p| palette.index_of(p).is_some()));
/// ```
pub fn diffuse(image: &mut Image, palette: &Palette) -> Vec<u8> {
    diffuse_with_kernel(image, palette, &FLOYD_STEINBERG)
}
