//! End-to-end conversion: decoded image in, C source file out.

use std::path::Path;

use image::DynamicImage;

use epd_quant::{dither_floyd_steinberg, encode, render_c_array};

use crate::error::ConvertError;
use crate::loader;

/// Name of the emitted C array. Firmware includes the generated file and
/// references this symbol directly, so it is fixed.
pub const ARRAY_NAME: &str = "imageData";

/// Dither an image, encode it for the panel, and write the C source file.
///
/// Returns the `(width, height)` of the converted image so callers can
/// report it.
pub fn write_image_array(img: &DynamicImage, output: &Path) -> Result<(usize, usize), ConvertError> {
    let mut raster = loader::to_raster(img);
    dither_floyd_steinberg(&mut raster);

    let codes = encode(&raster);
    let source = render_c_array(ARRAY_NAME, &codes);
    std::fs::write(output, source)?;

    tracing::info!(
        width = raster.width(),
        height = raster.height(),
        bytes = codes.len(),
        output = %output.display(),
        "wrote image array"
    );
    Ok((raster.width(), raster.height()))
}
