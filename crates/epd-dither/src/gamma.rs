//! Gamma pre-correction lookup table
//!
//! The table is computed once per gamma value and shared by all three
//! channels, so correcting an image is a single table lookup per channel.

use crate::api::ConvertError;
use crate::image::Image;

/// Gamma used by the reference 7.3" panel deployment.
pub const DEFAULT_GAMMA: f64 = 1.2;

/// A 256-entry channel remap for `v -> round(255 * (v / 255)^(1 / gamma))`.
///
/// Gamma values above 1 brighten mid-tones, which compensates for the dark
/// rendering of dithered color e-paper.
///
/// # Example
///
/// ```
/// use epd_dither::GammaTable;
///
/// let table = GammaTable::new(1.0).unwrap();
/// assert!(table.is_identity());
///
/// let table = GammaTable::new(2.2).unwrap();
/// assert_eq!(table.map(0), 0);
/// assert_eq!(table.map(255), 255);
/// assert!(table.map(128) > 128);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GammaTable {
    gamma: f64,
    table: [u8; 256],
}

impl GammaTable {
    /// Build the table for `gamma`.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidGamma`] when `gamma` is not a finite
    /// value greater than zero.
    pub fn new(gamma: f64) -> Result<Self, ConvertError> {
        if !gamma.is_finite() || gamma <= 0.0 {
            return Err(ConvertError::InvalidGamma(gamma));
        }

        let inv = 1.0 / gamma;
        let mut table = [0u8; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            let v = 255.0 * (i as f64 / 255.0).powf(inv);
            *entry = v.round().clamp(0.0, 255.0) as u8;
        }

        Ok(Self { gamma, table })
    }

    /// The gamma exponent this table was built for.
    #[inline]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Remap a single channel value.
    #[inline]
    pub fn map(&self, value: u8) -> u8 {
        self.table[value as usize]
    }

    /// The raw table, indexed by input channel value.
    #[inline]
    pub fn as_slice(&self) -> &[u8; 256] {
        &self.table
    }

    /// Whether the table leaves every value unchanged.
    pub fn is_identity(&self) -> bool {
        self.table.iter().enumerate().all(|(i, &v)| v as usize == i)
    }

    /// Remap every channel of every pixel in place.
    pub fn apply(&self, image: &mut Image) {
        if self.is_identity() {
            return;
        }
        for pixel in image.pixels_mut() {
            pixel.r = self.map(pixel.r);
            pixel.g = self.map(pixel.g);
            pixel.b = self.map(pixel.b);
        }
    }
}
