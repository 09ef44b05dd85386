//! Palette types and utilities
//!
//! This module provides the fixed 8-entry [`Palette`], nearest-color matching
//! and the exact color-to-index lookup used by the packer.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::{Palette, ACEP_7COLOR, PALETTE_LEN};
