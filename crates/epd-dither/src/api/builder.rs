//! Converter builder -- the primary entry point for the crate.
//!
//! [`Converter`] runs the whole pipeline: gamma pre-correction,
//! Floyd-Steinberg diffusion and 4-bit packing.

use crate::dither::diffuse;
use crate::gamma::{GammaTable, DEFAULT_GAMMA};
use crate::image::Image;
use crate::output::{pack, PackedBuffer};
use crate::palette::Palette;

use super::ConvertError;

/// High-level conversion builder.
///
/// - Constructor requires a [`Palette`], which is already validated
/// - Configuration methods consume and return `self`
/// - [`convert()`](Self::convert) takes `&self`, so one converter can be
///   reused for any number of images; no state is shared between calls
///
/// # Example
///
/// ```
/// use epd_dither::{Converter, Image, Palette, Rgb};
///
/// let converter = Converter::new(Palette::acep_7color()).gamma(1.0);
/// let image = Image::filled(2, 1, Rgb::new(0, 0, 0)).unwrap();
///
/// let conversion = converter.convert(image).unwrap();
/// assert_eq!(conversion.packed().bytes(), &[0x00]);
/// ```
#[derive(Debug, Clone)]
pub struct Converter {
    palette: Palette,
    gamma: f64,
}

impl Converter {
    /// Create a converter with the given palette and the default gamma
    /// ([`DEFAULT_GAMMA`]).
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            gamma: DEFAULT_GAMMA,
        }
    }

    /// Set the gamma exponent. Validated when converting.
    #[inline]
    pub fn gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    pub fn gamma_value(&self) -> f64 {
        self.gamma
    }

    /// Convert an image already at the target resolution.
    ///
    /// # Errors
    ///
    /// - [`ConvertError::InvalidGamma`] before the image is touched
    /// - [`ConvertError::UnquantizedPixel`] if diffusion left a non-palette
    ///   pixel behind (an internal bug, never an input problem)
    pub fn convert(&self, mut image: Image) -> Result<Conversion, ConvertError> {
        let table = GammaTable::new(self.gamma)?;

        table.apply(&mut image);
        let indices = diffuse(&mut image, &self.palette);
        let packed = pack(&image, &self.palette)?;

        tracing::debug!(
            width = image.width(),
            height = image.height(),
            gamma = self.gamma,
            packed_len = packed.len(),
            "Converted image"
        );

        Ok(Conversion {
            image,
            indices,
            packed,
            palette: self.palette.clone(),
        })
    }

    /// Convert packed `[R, G, B, ...]` bytes of a `width x height` raster.
    pub fn convert_rgb(
        &self,
        bytes: &[u8],
        width: usize,
        height: usize,
    ) -> Result<Conversion, ConvertError> {
        self.convert(Image::from_rgb_bytes(width, height, bytes)?)
    }
}

/// Result of a single conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    image: Image,
    indices: Vec<u8>,
    packed: PackedBuffer,
    palette: Palette,
}

impl Conversion {
    /// The packed 4-bit frame.
    #[inline]
    pub fn packed(&self) -> &PackedBuffer {
        &self.packed
    }

    /// Consume the conversion, keeping only the packed frame.
    #[inline]
    pub fn into_packed(self) -> PackedBuffer {
        self.packed
    }

    /// The quantized image; every pixel is a palette member.
    #[inline]
    pub fn image(&self) -> &Image {
        &self.image
    }

    /// Palette index of every pixel, row-major.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// The palette the image was quantized against.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}
