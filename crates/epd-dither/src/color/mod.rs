//! Color types
//!
//! The pipeline works on plain 8-bit sRGB triples end to end; there is no
//! linear-light or perceptual space involved.

mod rgb;

pub use rgb::Rgb;
