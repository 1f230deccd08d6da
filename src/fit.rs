//! Geometry fitting for the 800x480 panel.
//!
//! The `epdframe` binary renders for a fixed panel, so arbitrary input
//! images are rotated (for vertical mounting), scaled to cover the panel
//! while preserving aspect ratio, and center-cropped to the exact panel
//! dimensions.

use std::str::FromStr;

use image::{imageops::FilterType, DynamicImage};
use thiserror::Error;

/// Panel width in pixels.
pub const DISPLAY_WIDTH: u32 = 800;
/// Panel height in pixels.
pub const DISPLAY_HEIGHT: u32 = 480;

/// Physical mounting orientation of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Panel mounted landscape; image used as-is.
    Horizontal,
    /// Panel mounted portrait; image rotated 90 degrees before fitting.
    Vertical,
}

#[derive(Debug, Error)]
#[error("invalid orientation '{0}' (expected 'horizontal' or 'vertical')")]
pub struct ParseOrientationError(String);

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    /// Case-insensitive parse of "horizontal" / "vertical".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            _ => Err(ParseOrientationError(s.to_string())),
        }
    }
}

/// Rotate, scale, and crop an image to exactly 800x480.
///
/// Steps, in order:
///
/// 1. Rotate 90 degrees when `orientation` is [`Orientation::Vertical`],
///    swapping width and height before the scale computation.
/// 2. Resize so the image covers the panel: scale by
///    `max(800/w, 480/h)` with Lanczos3 resampling, rounding dimensions up
///    so neither falls short of the panel.
/// 3. Center-crop to exactly 800x480.
///
/// The result is always exactly 800x480 regardless of input aspect ratio.
pub fn fit_to_display(img: &DynamicImage, orientation: Orientation) -> DynamicImage {
    let img = match orientation {
        Orientation::Vertical => img.rotate90(),
        Orientation::Horizontal => img.clone(),
    };

    let (width, height) = (img.width(), img.height());
    let scale = f64::max(
        DISPLAY_WIDTH as f64 / width as f64,
        DISPLAY_HEIGHT as f64 / height as f64,
    );
    // Round up so the cover box is never undershot by float truncation
    let new_width = ((width as f64 * scale).ceil() as u32).max(DISPLAY_WIDTH);
    let new_height = ((height as f64 * scale).ceil() as u32).max(DISPLAY_HEIGHT);

    tracing::debug!(width, height, new_width, new_height, "fitting to panel");

    let resized = img.resize_exact(new_width, new_height, FilterType::Lanczos3);

    let x = (new_width - DISPLAY_WIDTH) / 2;
    let y = (new_height - DISPLAY_HEIGHT) / 2;
    resized.crop_imm(x, y, DISPLAY_WIDTH, DISPLAY_HEIGHT)
}
