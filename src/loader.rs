//! Image decoding and raster conversion.
//!
//! Decoding is delegated to the `image` crate; the supported input formats
//! are whatever it can read. Decoded pixels are flattened to RGB (alpha
//! dropped) and handed to `epd-quant` as a mutable raster.

use std::path::Path;

use image::{DynamicImage, ImageReader};

use epd_quant::Raster;

use crate::error::ConvertError;

/// Open and decode an image file.
///
/// Corrupt or missing files surface as [`ConvertError`]; there is no retry
/// or recovery here.
pub fn load_image(path: &Path) -> Result<DynamicImage, ConvertError> {
    let img = ImageReader::open(path)?.decode()?;
    tracing::debug!(
        width = img.width(),
        height = img.height(),
        "decoded input image"
    );
    Ok(img)
}

/// Convert a decoded image to an RGB raster at its native resolution.
pub fn to_raster(img: &DynamicImage) -> Raster {
    let rgb = img.to_rgb8();
    Raster::from_rgb8(rgb.as_raw(), rgb.width() as usize, rgb.height() as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use epd_quant::Rgb;
    use image::RgbImage;

    #[test]
    fn test_to_raster_preserves_dimensions_and_samples() {
        let mut img = RgbImage::new(3, 2);
        img.put_pixel(0, 0, image::Rgb([255, 0, 0]));
        img.put_pixel(2, 1, image::Rgb([10, 20, 30]));

        let raster = to_raster(&DynamicImage::ImageRgb8(img));

        assert_eq!(raster.width(), 3);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.get(0, 0), Rgb::from_u8(255, 0, 0));
        assert_eq!(raster.get(2, 1), Rgb::from_u8(10, 20, 30));
        assert_eq!(raster.get(1, 0), Rgb::from_u8(0, 0, 0));
    }

    #[test]
    fn test_load_image_missing_file_is_an_error() {
        let result = load_image(Path::new("/nonexistent/input.png"));
        assert!(result.is_err(), "missing input must propagate as an error");
    }

    #[test]
    fn test_load_image_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.png");

        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, image::Rgb([10, 10, 10]));
        img.put_pixel(1, 0, image::Rgb([240, 240, 240]));
        img.save(&path).unwrap();

        let loaded = load_image(&path).unwrap();
        let raster = to_raster(&loaded);
        assert_eq!(raster.get(0, 0), Rgb::from_u8(10, 10, 10));
        assert_eq!(raster.get(1, 0), Rgb::from_u8(240, 240, 240));
    }
}
