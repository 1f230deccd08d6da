//! Error diffusion kernel definition.
//!
//! The kernel specifies how quantization error is distributed to neighboring
//! pixels that have not yet been processed.

/// An error diffusion kernel.
///
/// Each entry specifies an offset `(dx, dy)` relative to the current pixel
/// and a weight for that neighbor. A neighbor receives
/// `error * weight / divisor`. Offsets only ever point at pixels that come
/// later in row-major order (right on the current row, or anywhere on
/// following rows).
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries for error diffusion.
    ///
    /// - `dx`: horizontal offset (positive = right)
    /// - `dy`: vertical offset (always >= 0; 0 means current row)
    /// - `weight`: numerator of the error fraction for this neighbor
    pub entries: &'static [(i32, i32, u8)],

    /// Total divisor for normalizing weights.
    pub divisor: u8,

    /// Maximum dy value in entries (how many rows ahead the kernel reaches).
    pub max_dy: usize,
}

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 right, 3/16 bottom-left, 5/16 bottom, 1/16 bottom-right.
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
    max_dy: 1,
};
