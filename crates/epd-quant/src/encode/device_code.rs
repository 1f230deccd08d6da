//! Per-pixel device color codes.
//!
//! The panel consumes one byte per pixel in its own color numbering, which is
//! unrelated to palette index. Classification uses independent per-channel
//! thresholds, not palette lookup: the encoding format is defined this way by
//! the display driver, and the rule order is part of the output contract.

use crate::color::Rgb;

/// Device code for white.
pub const EPD_WHITE: u8 = 0xFF;
/// Device code for black.
pub const EPD_BLACK: u8 = 0x00;
/// Device code for red.
pub const EPD_RED: u8 = 0xE0;
/// Device code for green.
pub const EPD_GREEN: u8 = 0x1C;
/// Device code for blue.
pub const EPD_BLUE: u8 = 0x03;
/// Device code for yellow.
pub const EPD_YELLOW: u8 = 0xFC;

/// A channel counts as "high" above this value.
const HIGH: f32 = 200.0;
/// A channel counts as "low" below this value.
const LOW: f32 = 50.0;

/// Map an RGB triple to its single-byte device color code.
///
/// Rules are evaluated in fixed priority order; the first match wins:
///
/// 1. all channels high          -> white
/// 2. all channels low           -> black
/// 3. r high, g low, b low       -> red
/// 4. r low, g high, b low       -> green
/// 5. r low, g low, b high       -> blue
/// 6. r high, g high, b low      -> yellow
/// 7. anything else              -> white (fallback)
///
/// Dithered rasters hold exact palette colors (0 or 255 per channel), so
/// every quantized pixel hits one of rules 1-6. The fallback exists for
/// callers that encode without dithering. This threshold classification can
/// disagree with [`nearest_palette_color`](crate::nearest_palette_color) on
/// ambiguous non-quantized input; the two schemes are intentionally kept
/// separate.
pub fn device_code(color: Rgb) -> u8 {
    let Rgb { r, g, b } = color;

    if r > HIGH && g > HIGH && b > HIGH {
        return EPD_WHITE;
    }
    if r < LOW && g < LOW && b < LOW {
        return EPD_BLACK;
    }
    if r > HIGH && g < LOW && b < LOW {
        return EPD_RED;
    }
    if r < LOW && g > HIGH && b < LOW {
        return EPD_GREEN;
    }
    if r < LOW && g < LOW && b > HIGH {
        return EPD_BLUE;
    }
    if r > HIGH && g > HIGH && b < LOW {
        return EPD_YELLOW;
    }
    EPD_WHITE
}
