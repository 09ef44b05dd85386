//! Error diffusion dithering against a fixed palette.
//!
//! The sweep visits pixels in strict row-major order and pushes each pixel's
//! quantization error onto unvisited neighbors, so every pixel is matched
//! against its original value plus whatever error earlier pixels diffused
//! into it.
//!
//! # Working values
//!
//! Accumulated values are kept in an `i32` buffer and are **not** clamped to
//! `0..=255` between updates. A pixel pushed past white keeps its overshoot
//! until it is itself quantized, at which point the overshoot becomes part of
//! its own error. [`Palette::nearest`] is total over any `i32` input, so no
//! clamping is needed for correctness.
//!
//! # Truncation
//!
//! Each neighbor update computes `current + error * weight / divisor` exactly
//! and truncates the sum toward zero. This is done in integer arithmetic as
//! `(current * divisor + error * weight) / divisor`; Rust's signed division
//! already truncates toward zero.

mod floyd_steinberg;
mod kernel;

pub use floyd_steinberg::diffuse;
pub use kernel::{Kernel, FLOYD_STEINBERG};

use crate::image::Image;
use crate::palette::Palette;

/// Quantize `image` in place with the given kernel.
///
/// On return every pixel of `image` is an exact palette member. The returned
/// vector holds the chosen palette index of every pixel in row-major order.
pub fn diffuse_with_kernel(image: &mut Image, palette: &Palette, kernel: &Kernel) -> Vec<u8> {
    let width = image.width();
    let height = image.height();

    // Working buffer with i32 to carry negative and >255 values
    let mut buffer: Vec<[i32; 3]> = image.pixels().iter().map(|p| p.to_i32()).collect();
    let mut indices = Vec::with_capacity(buffer.len());

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let old = buffer[idx];

            let nearest = palette.nearest(old);
            let chosen = palette.color(nearest);
            image.pixels_mut()[idx] = chosen;
            indices.push(nearest as u8);

            let new = chosen.to_i32();
            buffer[idx] = new;
            let error = [old[0] - new[0], old[1] - new[1], old[2] - new[2]];

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i64 + dx as i64;
                let ny = y as i64 + dy as i64;
                if nx < 0 || nx >= width as i64 || ny >= height as i64 {
                    continue;
                }
                let target = &mut buffer[ny as usize * width + nx as usize];
                for c in 0..3 {
                    target[c] = spread(target[c], error[c], weight, kernel.divisor);
                }
            }
        }
    }

    indices
}

/// `trunc(current + error * weight / divisor)` without floating point.
#[inline]
fn spread(current: i32, error: i32, weight: i32, divisor: i32) -> i32 {
    (current * divisor + error * weight) / divisor
}
