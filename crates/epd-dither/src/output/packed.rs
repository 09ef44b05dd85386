//! 4-bit packing of quantized images.
//!
//! Two palette indices per byte, high nibble first, row-major. When the
//! pixel count is odd the last byte's low nibble holds the palette's
//! fallback index (its last entry), never a repeated pixel and never zero.

use crate::api::ConvertError;
use crate::image::Image;
use crate::palette::Palette;

/// Packed 4-bit-per-pixel frame buffer.
///
/// # Example
///
/// ```
/// use epd_dither::{pack, Image, Palette, Rgb};
///
/// let palette = Palette::acep_7color();
/// let image = Image::new(3, 1, vec![
///     Rgb::new(255, 255, 255),
///     Rgb::new(0, 0, 0),
///     Rgb::new(191, 0, 0),
/// ]).unwrap();
///
/// let packed = pack(&image, &palette).unwrap();
/// assert_eq!(packed.bytes(), &[0x10, 0x47]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBuffer {
    bytes: Vec<u8>,
    width: usize,
    height: usize,
}

impl PackedBuffer {
    /// Byte length of a packed `width x height` frame: `ceil(width * height / 2)`.
    #[inline]
    pub fn expected_len(width: usize, height: usize) -> usize {
        (width * height).div_ceil(2)
    }

    /// Wrap already-packed bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::SizeMismatch`] when `bytes` is not exactly
    /// [`expected_len`](Self::expected_len) long.
    pub fn new(bytes: Vec<u8>, width: usize, height: usize) -> Result<Self, ConvertError> {
        let expected = Self::expected_len(width, height);
        if bytes.len() != expected {
            return Err(ConvertError::SizeMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            bytes,
            width,
            height,
        })
    }

    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Width of the frame the bytes were packed from.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the frame the bytes were packed from.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Expand back into one palette index per pixel, dropping the padding
    /// nibble of an odd-sized frame.
    pub fn unpack(&self) -> Vec<u8> {
        let count = self.width * self.height;
        self.bytes
            .iter()
            .flat_map(|&b| [b >> 4, b & 0x0F])
            .take(count)
            .collect()
    }
}

impl AsRef<[u8]> for PackedBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Pack a quantized image into nibbles.
///
/// Every pixel must be an exact palette member.
///
/// # Errors
///
/// Returns [`ConvertError::UnquantizedPixel`] for the first pixel that is
/// not in `palette`. The packer never falls back to a nearest match, as that
/// would hide a diffusion bug.
pub fn pack(image: &Image, palette: &Palette) -> Result<PackedBuffer, ConvertError> {
    let width = image.width();
    let indices = image
        .pixels()
        .iter()
        .enumerate()
        .map(|(i, &color)| {
            palette
                .index_of(color)
                .ok_or(ConvertError::UnquantizedPixel {
                    x: i % width,
                    y: i / width,
                    color,
                })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    PackedBuffer::new(
        pack_indices(&indices, palette.fallback_index()),
        width,
        image.height(),
    )
}

/// Pack palette indices two per byte, high nibble first.
///
/// An odd trailing index is paired with `fallback` in the low nibble.
pub fn pack_indices(indices: &[u8], fallback: u8) -> Vec<u8> {
    indices
        .chunks(2)
        .map(|pair| {
            let high = pair[0] & 0x0F;
            let low = pair.get(1).copied().unwrap_or(fallback) & 0x0F;
            (high << 4) | low
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::palette::ACEP_7COLOR;

    #[test]
    fn test_pack_indices_even() {
        assert_eq!(pack_indices(&[1, 2, 3, 4], 7), vec![0x12, 0x34]);
    }

    #[test]
    fn test_pack_indices_odd_uses_fallback() {
        assert_eq!(pack_indices(&[0, 5, 6], 7), vec![0x05, 0x67]);
        assert_eq!(pack_indices(&[0], 7), vec![0x07]);
    }

    #[test]
    fn test_pack_indices_empty() {
        assert!(pack_indices(&[], 7).is_empty());
    }

    #[test]
    fn test_pack_rejects_unquantized_pixel() {
        let palette = Palette::acep_7color();
        let image = Image::new(
            2,
            2,
            vec![ACEP_7COLOR[0], ACEP_7COLOR[1], ACEP_7COLOR[2], Rgb::new(1, 1, 1)],
        )
        .unwrap();

        let err = pack(&image, &palette).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::UnquantizedPixel {
                x: 1,
                y: 1,
                color
            } if color == Rgb::new(1, 1, 1)
        ));
    }

    #[test]
    fn test_pack_all_palette_entries() {
        let palette = Palette::acep_7color();
        let image = Image::new(8, 1, ACEP_7COLOR.to_vec()).unwrap();
        let packed = pack(&image, &palette).unwrap();
        assert_eq!(packed.bytes(), &[0x01, 0x23, 0x45, 0x67]);
        assert_eq!(packed.unpack(), vec![0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_expected_len() {
        assert_eq!(PackedBuffer::expected_len(800, 480), 192_000);
        assert_eq!(PackedBuffer::expected_len(1, 1), 1);
        assert_eq!(PackedBuffer::expected_len(3, 3), 5);
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        assert!(PackedBuffer::new(vec![0; 2], 3, 1).is_ok());
        assert!(matches!(
            PackedBuffer::new(vec![0; 3], 3, 1),
            Err(ConvertError::SizeMismatch {
                expected: 2,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_unpack_drops_padding() {
        let packed = PackedBuffer::new(vec![0x12, 0x37], 3, 1).unwrap();
        assert_eq!(packed.unpack(), vec![1, 2, 3]);
    }
}
