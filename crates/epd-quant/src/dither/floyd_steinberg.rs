//! Floyd-Steinberg error diffusion dithering.
//!
//! Floyd-Steinberg distributes 100% of the quantization error to 4 forward
//! neighbors, producing smooth gradients across the small 6-color palette.

use crate::raster::Raster;

use super::{dither_with_kernel, FLOYD_STEINBERG};

/// Quantize a raster to the panel palette with Floyd-Steinberg dithering.
///
/// After this call every sample in the raster is an exact palette color
/// (each channel exactly 0 or 255). The pass is pure numeric computation
/// with no error states; degenerate inputs (1x1, all-black) still produce
/// a valid quantized raster.
///
/// # Example
///
/// ```
/// use epd_quant::{dither_floyd_steinberg, Raster, Rgb};
///
/// let mut raster = Raster::new(2, 1, Rgb::from_u8(240, 240, 240));
/// dither_floyd_steinberg(&mut raster);
/// assert_eq!(raster.get(0, 0), Rgb::from_u8(255, 255, 255));
/// ```
pub fn dither_floyd_steinberg(raster: &mut Raster) {
    dither_with_kernel(raster, &FLOYD_STEINBERG);
}
