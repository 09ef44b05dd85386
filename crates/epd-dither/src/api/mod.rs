//! Public API for the epd-dither crate.
//!
//! This module provides the high-level API: [`Converter`] builder and
//! [`ConvertError`] unified error type.

mod builder;
mod error;

pub use builder::{Conversion, Converter};
pub use error::ConvertError;
