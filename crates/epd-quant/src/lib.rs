//! epd-quant: fixed-palette quantization for 6-color e-paper panels
//!
//! This library converts continuous-tone RGB rasters into the six colors a
//! 6-color electrophoretic display can actually show, and encodes the result
//! as the display's native color bytes.
//!
//! # Pipeline
//!
//! ```text
//! RGB raster (f32 samples, 0..255 scale)
//!     |
//!     v
//! Floyd-Steinberg dithering     (nearest palette color + error diffusion)
//!     |
//!     v
//! quantized raster              (every pixel an exact palette color)
//!     |
//!     v
//! device color codes            (one byte per pixel, threshold rules)
//!     |
//!     v
//! C array literal               (firmware source data)
//! ```
//!
//! # Quick Start
//!
//! ```
//! use epd_quant::{dither_floyd_steinberg, encode, render_c_array, Raster, Rgb};
//!
//! let mut raster = Raster::new(2, 1, Rgb::from_u8(10, 10, 10));
//! dither_floyd_steinberg(&mut raster);
//!
//! let codes = encode(&raster);
//! let literal = render_c_array("imageData", &codes);
//! assert!(literal.starts_with("const unsigned char imageData[2]"));
//! ```
//!
//! # Two Classification Schemes
//!
//! The crate intentionally contains two independent ways of classifying a
//! color:
//!
//! - [`nearest_palette_color`]: squared Euclidean distance against the fixed
//!   palette, used during dithering.
//! - [`device_code`]: independent per-channel threshold rules, used during
//!   encoding.
//!
//! For quantized rasters (exact 0/255 channels) the two always agree. For
//! arbitrary input they can disagree on ambiguous colors. They are kept
//! separate because the device encoding format is defined by thresholds, not
//! by palette index, and merging them would change output for callers that
//! encode without dithering.
//!
//! # Ordering Matters
//!
//! Error diffusion is inherently sequential: each pixel's input depends on
//! error diffused from already-processed neighbors. [`dither_floyd_steinberg`]
//! processes pixels in strict row-major order (top-to-bottom, left-to-right)
//! and must not be parallelized or reordered.

pub mod color;
pub mod dither;
pub mod encode;
pub mod palette;
pub mod raster;


pub use color::Rgb;
pub use dither::dither_floyd_steinberg;
pub use encode::{device_code, encode, render_c_array};
pub use palette::{nearest_palette_color, PALETTE};
pub use raster::Raster;
