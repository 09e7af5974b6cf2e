//! Color channel helpers for RGBA pixels.
//!
//! Channel index constants, BT.601 luma, and hex string conversion.
//! These are the byte-level helpers shared by every engine; full color
//! space conversions live in `rasterlab-color`.

use crate::error::{Error, Result};

/// Red channel (byte 0)
pub const RED: usize = 0;
/// Green channel (byte 1)
pub const GREEN: usize = 1;
/// Blue channel (byte 2)
pub const BLUE: usize = 2;
/// Alpha channel (byte 3)
pub const ALPHA: usize = 3;

/// BT.601 luma of an RGB triple, in [0, 255].
///
/// `0.299*R + 0.587*G + 0.114*B`, the grayscale weighting used by the
/// tonal engine's desaturation and the sketch/edge effects.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> f32 {
    0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32
}

/// Clamp a floating-point channel value to [0, 255] and round to a byte.
#[inline]
pub fn clamp_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Format an RGB triple as a lowercase hex string, e.g. `#ff8800`.
pub fn to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Parse a hex color string (`#rrggbb` or `rrggbb`) into an RGB triple.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] for strings that are not six hex
/// digits after an optional leading `#`.
pub fn from_hex(hex: &str) -> Result<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return Err(Error::InvalidParameter(format!(
            "invalid hex color: expected 6 digits, got {}",
            hex.len()
        )));
    }
    let parse = |s: &str| {
        u8::from_str_radix(s, 16)
            .map_err(|e| Error::InvalidParameter(format!("invalid hex color: {e}")))
    };
    Ok((parse(&hex[0..2])?, parse(&hex[2..4])?, parse(&hex[4..6])?))
}
