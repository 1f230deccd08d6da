//! C array literal serialization.
//!
//! The byte sequence is rendered as a `const unsigned char` array literal in
//! the exact textual layout the firmware build expects. The format is simple
//! but must match byte for byte: declared size, two-digit uppercase hex
//! entries with trailing commas, a line break after every 16th entry, and a
//! closing `};` on its own line.

use std::fmt::Write;

/// Number of byte entries per line in the array body.
pub const ENTRIES_PER_LINE: usize = 16;

/// Render device color codes as a named C array literal.
///
/// The declared element count always equals `codes.len()`. Entries are
/// formatted as `0xHH,` in row-major pixel order; every 16th entry ends a
/// line. The literal is closed with `\n};` after the last entry.
///
/// # Example
///
/// ```
/// use epd_quant::render_c_array;
///
/// let literal = render_c_array("imageData", &[0x00, 0xFF]);
/// assert_eq!(literal, "const unsigned char imageData[2] = {\n0x00,0xFF,\n};");
/// ```
pub fn render_c_array(name: &str, codes: &[u8]) -> String {
    let mut out = format!("const unsigned char {}[{}] = {{\n", name, codes.len());

    for (i, code) in codes.iter().enumerate() {
        // Infallible on String; avoids a temporary per entry
        let _ = write!(out, "0x{:02X},", code);
        if (i + 1) % ENTRIES_PER_LINE == 0 {
            out.push('\n');
        }
    }

    out.push_str("\n};");
    out
}
