//! Device color encoding and C array serialization.
//!
//! Quantized rasters are turned into the panel's native single-byte color
//! codes, then serialized as a C array literal suitable for inclusion as
//! firmware source data.

mod c_array;
mod device_code;

pub use c_array::{render_c_array, ENTRIES_PER_LINE};
pub use device_code::{
    device_code, EPD_BLACK, EPD_BLUE, EPD_GREEN, EPD_RED, EPD_WHITE, EPD_YELLOW,
};

use crate::raster::Raster;

/// Encode every raster pixel as a device color code, in row-major order.
///
/// The returned sequence always has exactly `width * height` entries.
pub fn encode(raster: &Raster) -> Vec<u8> {
    raster.pixels().iter().map(|&p| device_code(p)).collect()
}
