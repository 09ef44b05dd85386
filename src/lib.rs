//! epd-convert - images to 7-color e-paper frame buffers
//!
//! Loads images, fits them to the panel, dithers them onto the eight-entry
//! ACeP palette with `epd-dither` and emits the packed frame as a C source
//! and header pair. This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
