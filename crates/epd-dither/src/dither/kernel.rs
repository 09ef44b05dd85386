//! Diffusion weights.

/// Weights used to push quantization error onto unvisited neighbors.
///
/// Each entry is `(dx, dy, weight)`: the neighbor at that offset receives
/// `error * weight / divisor`. Offsets only reach pixels that a row-major
/// scan has not visited yet.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// Neighbor offsets with their weights
    pub entries: &'static [(i32, i32, i32)],

    /// Sum of all weights
    pub divisor: i32,
}

/// The classic 7/3/5/1 split over sixteenths.
///
/// ```text
///          cur  7/16
///  3/16   5/16  1/16
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),
        (-1, 1, 3),
        (0, 1, 5),
        (1, 1, 1),
    ],
    divisor: 16,
};
