//! Unsharp mask sharpening
//!
//! Sharpens by adding back the difference between the image and a
//! blurred copy. A negative amount subtracts the difference instead,
//! which softens.

use crate::convolve::gaussian_blur;
use crate::{FilterError, FilterResult};
use rasterlab_core::PixelBuffer;

/// Sharpen (or soften) with an unsharp mask.
///
/// `result = original + amount * (original - blurred)` per color
/// channel, clamped. Alpha passes through. `amount` of 0 returns a
/// copy; negative amounts soften toward the blurred image.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `amount` is not finite,
/// or an error from the underlying blur if `radius` is 0.
pub fn unsharp_mask(buf: &PixelBuffer, amount: f32, radius: u32) -> FilterResult<PixelBuffer> {
    if !amount.is_finite() {
        return Err(FilterError::InvalidParameters(
            "unsharp amount must be finite".into(),
        ));
    }

    let blurred = gaussian_blur(buf, radius)?;
    let mut out = PixelBuffer::new(buf.width(), buf.height())?;

    for y in 0..buf.height() {
        for x in 0..buf.width() {
            let (r, g, b, a) = buf.get_rgba_unchecked(x, y);
            let (br, bg, bb, _) = blurred.get_rgba_unchecked(x, y);

            let sharpen = |orig: u8, blur: u8| -> u8 {
                let v = orig as f32 + amount * (orig as f32 - blur as f32);
                v.round().clamp(0.0, 255.0) as u8
            };

            out.set_rgba_unchecked(x, y, sharpen(r, br), sharpen(g, bg), sharpen(b, bb), a);
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn soft_edge() -> PixelBuffer {
        // A ramp with a soft transition in the middle
        let mut buf = PixelBuffer::new(9, 3).unwrap();
        for y in 0..3 {
            for x in 0..9 {
                let v = match x {
                    0..=2 => 50,
                    3 => 90,
                    4 => 128,
                    5 => 166,
                    _ => 206,
                };
                buf.set_rgba_unchecked(x, y, v, v, v, 255);
            }
        }
        buf
    }

    // ========== unsharp mask tests ==========

    #[test]
    fn test_zero_amount_is_identity() {
        let buf = soft_edge();
        let out = unsharp_mask(&buf, 0.0, 2).unwrap();
        assert_eq!(out.data(), buf.data());
    }

    #[test]
    fn test_flat_image_unchanged() {
        let buf = PixelBuffer::new_filled(6, 6, 130, 130, 130, 255).unwrap();
        let out = unsharp_mask(&buf, 1.5, 2).unwrap();
        for (r, _, _, _) in out.pixels() {
            assert!((r as i32 - 130).abs() <= 1);
        }
    }

    #[test]
    fn test_positive_amount_increases_local_contrast() {
        let buf = soft_edge();
        let out = unsharp_mask(&buf, 1.0, 2).unwrap();
        // Dark side of the edge gets darker, bright side brighter
        let (dark_in, _, _, _) = buf.get_rgba(2, 1).unwrap();
        let (dark_out, _, _, _) = out.get_rgba(2, 1).unwrap();
        let (bright_in, _, _, _) = buf.get_rgba(6, 1).unwrap();
        let (bright_out, _, _, _) = out.get_rgba(6, 1).unwrap();
        assert!(dark_out <= dark_in);
        assert!(bright_out >= bright_in);
        assert!(bright_out - dark_out > bright_in - dark_in);
    }

    #[test]
    fn test_negative_amount_softens() {
        let buf = soft_edge();
        let sharpened = unsharp_mask(&buf, -0.5, 2).unwrap();
        let blurred = crate::convolve::gaussian_blur(&buf, 2).unwrap();
        // Softened result sits between original and fully blurred
        let (orig, _, _, _) = buf.get_rgba(3, 1).unwrap();
        let (soft, _, _, _) = sharpened.get_rgba(3, 1).unwrap();
        let (blur, _, _, _) = blurred.get_rgba(3, 1).unwrap();
        let lo = orig.min(blur);
        let hi = orig.max(blur);
        assert!(soft >= lo.saturating_sub(1) && soft <= hi.saturating_add(1));
    }

    #[test]
    fn test_non_finite_amount_rejected() {
        let buf = soft_edge();
        assert!(unsharp_mask(&buf, f32::NAN, 2).is_err());
        assert!(unsharp_mask(&buf, f32::INFINITY, 2).is_err());
    }
}
