//! Mutable RGB raster, the working buffer of the dithering pass.

use crate::color::Rgb;

/// A 2D grid of RGB samples in row-major order.
///
/// The raster is created from decoded image input, mutated in place by the
/// dithering pass (samples accumulate diffused error and may transiently
/// leave the 0..=255 range), and discarded after encoding. Dimensions never
/// change after construction.
#[derive(Debug, Clone)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl Raster {
    /// Create a raster filled with a single color.
    pub fn new(width: usize, height: usize, fill: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    /// Create a raster from a flat 8-bit RGB buffer (`[R, G, B, R, G, B, ...]`),
    /// as produced by an image decoder.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `data.len() == width * height * 3`.
    pub fn from_rgb8(data: &[u8], width: usize, height: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            width * height * 3,
            "RGB buffer length ({}) must match width * height * 3 ({}x{}x3={})",
            data.len(),
            width,
            height,
            width * height * 3,
        );
        let pixels = data
            .chunks_exact(3)
            .map(|c| Rgb::from_u8(c[0], c[1], c[2]))
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Raster width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Raster height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// All samples in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Get the sample at (x, y).
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.pixels[y * self.width + x]
    }

    /// Replace the sample at (x, y).
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Rgb) {
        self.pixels[y * self.width + x] = color;
    }

    /// Clamp every sample to the 0..=255 range.
    ///
    /// Applied once after the full dithering pass. Clamping per diffusion
    /// step would change dithering results; drifted samples must keep their
    /// raw accumulated values until their own quantization step.
    pub fn clamp(&mut self) {
        for pixel in &mut self.pixels {
            *pixel = pixel.clamp();
        }
    }
}
