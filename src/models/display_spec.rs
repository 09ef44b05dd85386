use epd_dither::PackedBuffer;

use crate::error::AppError;

/// Frame geometry of a target panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySpec {
    pub width: u32,
    pub height: u32,
    /// Declared length of the packed frame array
    pub frame_bytes: usize,
}

impl DisplaySpec {
    /// Waveshare 7.3" ACeP (F): 800x480, 4 bits per pixel
    pub const EPD_7IN3F: Self = Self {
        width: 800,
        height: 480,
        frame_bytes: 192_000,
    };

    /// Spec for arbitrary dimensions; the frame length follows from them.
    pub fn from_dimensions(width: u32, height: u32) -> Result<Self, AppError> {
        match (width, height) {
            (800, 480) => Ok(Self::EPD_7IN3F),
            (0, _) | (_, 0) => Err(AppError::UnsupportedDimensions { width, height }),
            (w, h) => Ok(Self {
                width: w,
                height: h,
                frame_bytes: PackedBuffer::expected_len(w as usize, h as usize),
            }),
        }
    }

    /// Check a packed frame against the declared array length
    pub fn validate_size(&self, bytes: usize) -> Result<(), AppError> {
        if bytes != self.frame_bytes {
            Err(AppError::LengthMismatch {
                declared: self.frame_bytes,
                actual: bytes,
            })
        } else {
            Ok(())
        }
    }
}

impl Default for DisplaySpec {
    fn default() -> Self {
        Self::EPD_7IN3F
    }
}
