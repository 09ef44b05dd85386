//! Output types for the conversion pipeline.
//!
//! [`PackedBuffer`] is the byte-exact product handed to firmware: two
//! palette indices per byte, high nibble first.

mod packed;

pub use packed::{pack, pack_indices, PackedBuffer};
