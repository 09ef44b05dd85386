//! Error types for palette operations
//!
//! This module provides error types for color parsing and palette validation.

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
/// invalid length or invalid hexadecimal characters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for palette validation.
///
/// The packed output format stores one palette index per nibble and reserves
/// the last entry as padding, so a palette must have exactly
/// [`PALETTE_LEN`](super::PALETTE_LEN) distinct colors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// No colors provided in palette
    #[error("palette cannot be empty")]
    Empty,
    /// Palette does not have exactly the required number of colors
    #[error("palette must have exactly {expected} colors, got {actual}")]
    WrongSize {
        /// Required number of colors
        expected: usize,
        /// Number of colors provided
        actual: usize,
    },
    /// Duplicate color found at the specified index
    #[error("duplicate color found at index {index}")]
    DuplicateColor {
        /// Index where the duplicate was found
        index: usize,
    },
    /// Invalid hex color string
    #[error("invalid color: {0}")]
    ParseColor(#[from] ParseColorError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_wrong_size_message() {
        let err = PaletteError::WrongSize {
            expected: 8,
            actual: 7,
        };
        assert_eq!(err.to_string(), "palette must have exactly 8 colors, got 7");
    }

    #[test]
    fn test_parse_color_source_chain() {
        let inner = "zz".parse::<u8>().map_err(ParseColorError::from).unwrap_err();
        let err = PaletteError::from(inner);
        assert!(err.to_string().starts_with("invalid color: invalid hex character"));
        assert!(err.source().is_some());
    }
}
