//! epd-dither: fixed-palette dithering and 4-bit packing for color e-paper
//!
//! Converts an RGB raster into the frame buffer format of 7-color ACeP
//! panels: every pixel becomes one of eight palette entries and two entries
//! are packed into each byte.
//!
//! # Quick Start
//!
//! ```
//! use epd_dither::{Converter, Image, Palette, Rgb};
//!
//! let converter = Converter::new(Palette::acep_7color());
//! let image = Image::filled(800, 480, Rgb::new(120, 160, 200)).unwrap();
//!
//! let conversion = converter.convert(image).unwrap();
//! assert_eq!(conversion.packed().len(), 192_000);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! Image (target resolution, 8-bit RGB)
//!     |
//!     v
//! GammaTable::apply        v -> round(255 * (v/255)^(1/gamma)), in place
//!     |
//!     v
//! diffuse                  Floyd-Steinberg, row-major, i32 working values
//!     |                    Palette::nearest (L1, first minimum wins)
//!     v
//! pack                     exact palette lookup, two nibbles per byte,
//!     |                    odd tail padded with the last palette index
//!     v
//! PackedBuffer             ceil(width * height / 2) bytes
//! ```
//!
//! # Determinism
//!
//! Every stage is integer-exact apart from the gamma table, which is
//! computed once per gamma value. Identical image, palette and gamma always
//! produce identical bytes.

pub mod api;
pub mod color;
pub mod dither;
pub mod gamma;
pub mod image;
pub mod output;
pub mod palette;


pub use api::{Conversion, ConvertError, Converter};
pub use color::Rgb;
pub use dither::diffuse;
pub use gamma::{GammaTable, DEFAULT_GAMMA};
pub use image::Image;
pub use output::{pack, pack_indices, PackedBuffer};
pub use palette::{Palette, PaletteError, ParseColorError, ACEP_7COLOR, PALETTE_LEN};
