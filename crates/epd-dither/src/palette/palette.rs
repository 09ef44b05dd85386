//! Fixed 8-entry palette with nearest-color matching.
//!
//! The palette position of a color is its nibble code in the packed output,
//! so entry order is part of the output format.

use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use super::error::PaletteError;
use crate::color::Rgb;

/// Number of entries in every palette. Indices must fit in one nibble.
pub const PALETTE_LEN: usize = 8;

/// Reference palette of the 7.3" ACeP 7-color panel.
///
/// Order follows the panel's color codes: black, white, green, blue, red,
/// yellow, orange, and the "clean" code (0x7) which the panel cannot show
/// and which doubles as the padding color.
pub const ACEP_7COLOR: [Rgb; PALETTE_LEN] = [
    Rgb::new(0, 0, 0),
    Rgb::new(255, 255, 255),
    Rgb::new(67, 138, 28),
    Rgb::new(100, 64, 255),
    Rgb::new(191, 0, 0),
    Rgb::new(255, 243, 56),
    Rgb::new(232, 126, 0),
    Rgb::new(194, 164, 244),
];

/// An ordered set of exactly [`PALETTE_LEN`] distinct colors.
///
/// The exact color-to-index map is built once at construction time, so
/// per-pixel lookups during packing never scan the palette.
///
/// # Example
///
/// ```
/// use epd_dither::{Palette, Rgb, ACEP_7COLOR};
///
/// let palette = Palette::new(&ACEP_7COLOR).unwrap();
/// assert_eq!(palette.len(), 8);
/// assert_eq!(palette.index_of(Rgb::new(255, 255, 255)), Some(1));
/// assert_eq!(palette.fallback_index(), 7);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: [Rgb; PALETTE_LEN],
    lookup: HashMap<Rgb, u8>,
}

impl Palette {
    /// Create a palette from exactly [`PALETTE_LEN`] distinct colors.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::Empty`] if `colors` is empty
    /// - [`PaletteError::WrongSize`] if it does not hold exactly 8 colors
    /// - [`PaletteError::DuplicateColor`] if a color repeats
    pub fn new(colors: &[Rgb]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        let colors: [Rgb; PALETTE_LEN] =
            colors.try_into().map_err(|_| PaletteError::WrongSize {
                expected: PALETTE_LEN,
                actual: colors.len(),
            })?;

        let mut seen = HashSet::new();
        for (index, color) in colors.iter().enumerate() {
            if !seen.insert(*color) {
                return Err(PaletteError::DuplicateColor { index });
            }
        }

        let lookup = colors
            .iter()
            .enumerate()
            .map(|(index, &color)| (color, index as u8))
            .collect();

        Ok(Self { colors, lookup })
    }

    /// Create a palette from hex color strings.
    ///
    /// ```
    /// use epd_dither::Palette;
    ///
    /// let palette = Palette::from_hex(&[
    ///     "#000", "#fff", "#f00", "#0f0", "#00f", "#ff0", "#0ff", "#f0f",
    /// ]).unwrap();
    /// assert_eq!(palette.color(2).to_bytes(), [255, 0, 0]);
    /// ```
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self, PaletteError> {
        let colors = colors
            .iter()
            .map(|s| Rgb::from_str(s.as_ref()).map_err(PaletteError::ParseColor))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&colors)
    }

    /// The reference 7-color panel palette ([`ACEP_7COLOR`]).
    pub fn acep_7color() -> Self {
        let lookup = ACEP_7COLOR
            .iter()
            .enumerate()
            .map(|(index, &color)| (color, index as u8))
            .collect();
        Self {
            colors: ACEP_7COLOR,
            lookup,
        }
    }

    /// Number of entries (always [`PALETTE_LEN`]).
    #[inline]
    pub fn len(&self) -> usize {
        PALETTE_LEN
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Color at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= PALETTE_LEN`.
    #[inline]
    pub fn color(&self, index: usize) -> Rgb {
        self.colors[index]
    }

    /// All entries in nibble-code order.
    #[inline]
    pub fn colors(&self) -> &[Rgb; PALETTE_LEN] {
        &self.colors
    }

    /// Index written into the low nibble when the pixel count is odd.
    #[inline]
    pub fn fallback_index(&self) -> u8 {
        (PALETTE_LEN - 1) as u8
    }

    /// Exact lookup of a palette member's index.
    #[inline]
    pub fn index_of(&self, color: Rgb) -> Option<u8> {
        self.lookup.get(&color).copied()
    }

    /// Index of the entry closest to `pixel` by Manhattan (L1) distance.
    ///
    /// `pixel` holds working values that may lie outside `0..=255` while
    /// error diffusion is in progress. When several entries share the
    /// minimum distance the lowest index wins.
    pub fn nearest(&self, pixel: [i32; 3]) -> usize {
        let mut best_idx = 0;
        let mut best_dist = i64::MAX;

        for (idx, color) in self.colors.iter().enumerate() {
            let dist: i64 = pixel
                .iter()
                .zip(color.to_i32())
                .map(|(&p, c)| (p as i64 - c as i64).abs())
                .sum();
            // Strict comparison keeps the first minimum
            if dist < best_dist {
                best_dist = dist;
                best_idx = idx;
            }
        }

        best_idx
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::acep_7color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primaries() -> [Rgb; PALETTE_LEN] {
        [
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(255, 255, 0),
            Rgb::new(0, 255, 255),
            Rgb::new(255, 0, 255),
        ]
    }

    #[test]
    fn test_palette_construction() {
        let palette = Palette::new(&primaries()).unwrap();
        assert_eq!(palette.len(), 8);
        assert_eq!(palette.color(4), Rgb::new(0, 0, 255));
        assert_eq!(palette.fallback_index(), 7);
    }

    #[test]
    fn test_palette_empty_error() {
        assert_eq!(Palette::new(&[]), Err(PaletteError::Empty));
    }

    #[test]
    fn test_palette_wrong_size() {
        let colors = primaries();
        assert_eq!(
            Palette::new(&colors[..7]),
            Err(PaletteError::WrongSize {
                expected: 8,
                actual: 7
            })
        );

        let mut nine = colors.to_vec();
        nine.push(Rgb::new(1, 2, 3));
        assert_eq!(
            Palette::new(&nine),
            Err(PaletteError::WrongSize {
                expected: 8,
                actual: 9
            })
        );
    }

    #[test]
    fn test_palette_duplicate_color() {
        let mut colors = primaries();
        colors[6] = colors[1];
        assert_eq!(
            Palette::new(&colors),
            Err(PaletteError::DuplicateColor { index: 6 })
        );
    }

    #[test]
    fn test_acep_matches_validated_construction() {
        assert_eq!(Palette::acep_7color(), Palette::new(&ACEP_7COLOR).unwrap());
        assert_eq!(Palette::default(), Palette::acep_7color());
    }

    #[test]
    fn test_from_hex() {
        let palette = Palette::from_hex(&[
            "#000000", "#FFFFFF", "#438A1C", "#6440FF", "#BF0000", "#FFF338", "#E87E00",
            "#C2A4F4",
        ])
        .unwrap();
        assert_eq!(palette, Palette::acep_7color());
    }

    #[test]
    fn test_from_hex_invalid() {
        let err = Palette::from_hex(&["#000", "nope"]).unwrap_err();
        assert!(matches!(err, PaletteError::ParseColor(_)));
    }

    #[test]
    fn test_index_of_exact_only() {
        let palette = Palette::acep_7color();
        for (idx, &color) in ACEP_7COLOR.iter().enumerate() {
            assert_eq!(palette.index_of(color), Some(idx as u8));
        }
        assert_eq!(palette.index_of(Rgb::new(1, 0, 0)), None);
    }

    #[test]
    fn test_nearest_exact_match() {
        let palette = Palette::acep_7color();
        for (idx, &color) in ACEP_7COLOR.iter().enumerate() {
            assert_eq!(palette.nearest(color.to_i32()), idx);
        }
    }

    #[test]
    fn test_nearest_is_l1() {
        let palette = Palette::acep_7color();
        let pixel = [200, 200, 200];
        let brute = ACEP_7COLOR
            .iter()
            .map(|c| {
                pixel
                    .iter()
                    .zip(c.to_i32())
                    .map(|(&p, c)| (p - c).abs())
                    .sum::<i32>()
            })
            .enumerate()
            .min_by_key(|&(idx, dist)| (dist, idx))
            .map(|(idx, _)| idx)
            .unwrap();
        // "clean" (194, 164, 244) is 86 away, white is 165
        assert_eq!(brute, 7);
        assert_eq!(palette.nearest(pixel), brute);
    }

    #[test]
    fn test_nearest_tie_prefers_lower_index() {
        let palette = Palette::new(&[
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
            Rgb::new(100, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(120, 0, 0),
            Rgb::new(0, 255, 255),
            Rgb::new(255, 0, 255),
        ])
        .unwrap();
        // 10 away from both index 2 and index 5
        assert_eq!(palette.nearest([110, 0, 0]), 2);
    }

    #[test]
    fn test_nearest_accepts_out_of_range_values() {
        let palette = Palette::acep_7color();
        assert_eq!(palette.nearest([-400, -12, -9000]), 0);
        assert_eq!(palette.nearest([900, 900, 900]), 1);
        assert_eq!(palette.nearest([i32::MAX, i32::MAX, i32::MAX]), 1);
    }
}
