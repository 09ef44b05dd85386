//! Unified error type for the epd-dither public API.
//!
//! Configuration problems (gamma, dimensions, palette) are reported before
//! any pixel is touched. [`ConvertError::UnquantizedPixel`] is different: it
//! means the packer saw a color the diffuser should never have produced.

use thiserror::Error;

use crate::color::Rgb;
use crate::palette::{PaletteError, ParseColorError};

/// Unified error type for the epd-dither public API.
///
/// # Example
///
/// ```
/// use epd_dither::{ConvertError, Palette};
///
/// fn load_palette() -> Result<Palette, ConvertError> {
///     let palette = Palette::from_hex(&[
///         "#000", "#fff", "#f00", "#0f0", "#00f", "#ff0", "#0ff", "#f0f",
///     ])?;
///     Ok(palette)
/// }
/// # load_palette().unwrap();
/// ```
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Gamma must be a finite value greater than zero
    #[error("invalid gamma {0}: must be finite and greater than zero")]
    InvalidGamma(f64),

    /// Image has no pixels
    #[error("image has zero area ({width}x{height})")]
    ZeroArea { width: usize, height: usize },

    /// Pixel buffer does not match the declared dimensions
    #[error("pixel buffer size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Palette validation error
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),

    /// A pixel reached the packer without being quantized to the palette
    #[error("unquantized pixel {color} at ({x}, {y})")]
    UnquantizedPixel { x: usize, y: usize, color: Rgb },
}

impl From<ParseColorError> for ConvertError {
    fn from(err: ParseColorError) -> Self {
        ConvertError::Palette(PaletteError::ParseColor(err))
    }
}

impl ConvertError {
    /// Whether this error reports invalid input or configuration, as opposed
    /// to an internal contract violation.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, ConvertError::UnquantizedPixel { .. })
    }
}
