//! Error diffusion dithering.
//!
//! This module quantizes a raster to the fixed panel palette while diffusing
//! quantization error to forward neighbors, preserving perceived tonal detail
//! on a 6-color display.
//!
//! Pixels are processed in strict row-major order (top-to-bottom,
//! left-to-right). The traversal order is part of the output contract: each
//! pixel's input depends on error diffused from already-processed neighbors,
//! so the pass cannot be reordered or parallelized without changing results.

mod floyd_steinberg;
mod kernel;

pub use floyd_steinberg::dither_floyd_steinberg;
pub use kernel::{Kernel, FLOYD_STEINBERG};

use crate::color::Rgb;
use crate::palette::nearest_palette_color;
use crate::raster::Raster;

/// Core error diffusion loop parameterized by kernel.
///
/// For each pixel in row-major order: read the current (possibly
/// error-accumulated) sample, replace it with its nearest palette color,
/// and diffuse the signed per-channel error `old - new` to in-bounds
/// forward neighbors according to the kernel weights. Out-of-bounds
/// neighbor updates are skipped; error is lost at image edges and not
/// compensated.
///
/// Error accumulates directly in the raster samples. Samples are clamped
/// to 0..=255 exactly once, after the full pass -- clamping per diffusion
/// step would alter the accumulated values that later pixels quantize from.
pub(crate) fn dither_with_kernel(raster: &mut Raster, kernel: &Kernel) {
    let width = raster.width();
    let height = raster.height();
    let divisor = kernel.divisor as f32;

    for y in 0..height {
        for x in 0..width {
            let old = raster.get(x, y);
            let new = nearest_palette_color(old);
            raster.set(x, y, new);

            let error = [old.r - new.r, old.g - new.g, old.b - new.b];

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                if nx < 0 || ny < 0 || nx as usize >= width || ny as usize >= height {
                    continue;
                }
                let scale = weight as f32 / divisor;
                let neighbor = raster.get(nx as usize, ny as usize);
                raster.set(
                    nx as usize,
                    ny as usize,
                    Rgb::new(
                        neighbor.r + error[0] * scale,
                        neighbor.g + error[1] * scale,
                        neighbor.b + error[2] * scale,
                    ),
                );
            }
        }
    }

    raster.clamp();
}
