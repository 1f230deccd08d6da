//! The fixed 6-color panel palette and nearest-color search.
//!
//! 6-color electrophoretic panels can show exactly six pigments. The palette
//! is a process-wide constant; there is no user-supplied palette support and
//! no duplicate/empty validation to perform.

use crate::color::Rgb;

/// The six colors the panel can display, in declaration order.
///
/// Declaration order matters: [`nearest_palette_color`] breaks distance ties
/// by taking the first minimal entry, so reordering this table changes
/// dithering output for equidistant inputs.
pub const PALETTE: [Rgb; 6] = [
    Rgb::new(0.0, 0.0, 0.0),       // black
    Rgb::new(255.0, 255.0, 255.0), // white
    Rgb::new(255.0, 0.0, 0.0),     // red
    Rgb::new(255.0, 255.0, 0.0),   // yellow
    Rgb::new(0.0, 255.0, 0.0),     // green
    Rgb::new(0.0, 0.0, 255.0),     // blue
];

/// Find the nearest palette color by squared Euclidean distance in RGB space.
///
/// Linear scan over the 6 entries; strict `<` comparison means the first
/// minimal entry in declaration order wins on ties. No perceptual weighting
/// is applied -- the device encoding is defined in plain RGB terms and the
/// reference output depends on plain Euclidean matching.
///
/// # Example
/// ```
/// use epd_quant::{nearest_palette_color, Rgb};
///
/// let near_black = Rgb::from_u8(10, 10, 10);
/// assert_eq!(nearest_palette_color(near_black), Rgb::from_u8(0, 0, 0));
/// ```
#[inline]
pub fn nearest_palette_color(color: Rgb) -> Rgb {
    let mut best = PALETTE[0];
    let mut best_dist = f32::INFINITY;

    for &entry in PALETTE.iter() {
        let dist = color.distance_squared(entry);
        if dist < best_dist {
            best_dist = dist;
            best = entry;
        }
    }

    best
}
