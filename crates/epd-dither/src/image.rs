//! Owned row-major RGB raster.

use crate::api::ConvertError;
use crate::color::Rgb;

/// A `width x height` grid of [`Rgb`] pixels, row-major, origin top-left.
///
/// Construction rejects zero-area images, so every `Image` has at least one
/// pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl Image {
    /// Wrap a pixel vector.
    ///
    /// # Errors
    ///
    /// - [`ConvertError::ZeroArea`] if either dimension is zero
    /// - [`ConvertError::SizeMismatch`] if `pixels.len() != width * height`
    pub fn new(width: usize, height: usize, pixels: Vec<Rgb>) -> Result<Self, ConvertError> {
        if width == 0 || height == 0 {
            return Err(ConvertError::ZeroArea { width, height });
        }
        let expected = width
            .checked_mul(height)
            .ok_or(ConvertError::SizeMismatch {
                expected: usize::MAX,
                actual: pixels.len(),
            })?;
        if pixels.len() != expected {
            return Err(ConvertError::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build from packed `[R, G, B, R, G, B, ...]` bytes.
    ///
    /// ```
    /// use epd_dither::{Image, Rgb};
    ///
    /// let image = Image::from_rgb_bytes(2, 1, &[255, 0, 0, 0, 0, 255]).unwrap();
    /// assert_eq!(image.pixel(1, 0), Rgb::new(0, 0, 255));
    /// ```
    pub fn from_rgb_bytes(width: usize, height: usize, bytes: &[u8]) -> Result<Self, ConvertError> {
        if bytes.len() % 3 != 0 {
            return Err(ConvertError::SizeMismatch {
                expected: width.saturating_mul(height).saturating_mul(3),
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
            .collect();
        Self::new(width, height, pixels)
    }

    /// A single-color image.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Result<Self, ConvertError> {
        Self::new(width, height, vec![color; width.saturating_mul(height)])
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[y * self.width + x]
    }

    /// Overwrite the pixel at `(x, y)`.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Rgb) {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[y * self.width + x] = color;
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    /// Flatten back into packed RGB bytes.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_bytes()).collect()
    }
}
