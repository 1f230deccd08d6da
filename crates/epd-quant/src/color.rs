//! RGB sample type for the quantization pipeline.
//!
//! Unlike display-oriented color types, [`Rgb`] keeps its channels on the
//! 0..=255 scale as `f32`. Error diffusion accumulates fractional, signed
//! error into raster samples, so values may transiently be negative or
//! exceed 255 until the final clamp at the end of the dithering pass.

/// An RGB color sample with `f32` channels on the 0..=255 scale.
///
/// Values outside 0..=255 are legal during dithering (accumulated quantization
/// error) and are clamped once at the end of the pass, not per operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red channel (0.0..=255.0 nominal)
    pub r: f32,
    /// Green channel (0.0..=255.0 nominal)
    pub g: f32,
    /// Blue channel (0.0..=255.0 nominal)
    pub b: f32,
}

impl Rgb {
    /// Create a new color from raw channel values.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use epd_quant::Rgb;
    /// let red = Rgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 255.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32,
            g: g as f32,
            b: b as f32,
        }
    }

    /// Convert to a byte array `[R, G, B]`, rounding and clamping to 0..=255.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            self.r.round().clamp(0.0, 255.0) as u8,
            self.g.round().clamp(0.0, 255.0) as u8,
            self.b.round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Squared Euclidean distance to another color in RGB space.
    ///
    /// Squared distance preserves ordering, so the square root is never
    /// needed for nearest-color comparisons.
    #[inline]
    pub fn distance_squared(self, other: Rgb) -> f32 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        dr * dr + dg * dg + db * db
    }

    /// Clamp every channel to the 0..=255 range.
    #[inline]
    pub fn clamp(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 255.0),
            g: self.g.clamp(0.0, 255.0),
            b: self.b.clamp(0.0, 255.0),
        }
    }
}
