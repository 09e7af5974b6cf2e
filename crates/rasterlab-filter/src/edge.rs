//! Edge detection
//!
//! Sobel gradient operators over the luma channel.

use crate::{FilterResult, Kernel};
use rasterlab_core::{PixelBuffer, color};

/// Per-pixel Sobel gradient magnitudes over luma.
///
/// Returns one byte per pixel in row-major order, `√(gx² + gy²)`
/// clamped to [0, 255]. Uses replicate border sampling.
pub fn sobel_magnitude(buf: &PixelBuffer) -> FilterResult<Vec<u8>> {
    let w = buf.width();
    let h = buf.height();
    let kh = Kernel::sobel_horizontal();
    let kv = Kernel::sobel_vertical();

    let mut out = Vec::with_capacity((w * h) as usize);

    for y in 0..h {
        for x in 0..w {
            let mut gx = 0.0f32;
            let mut gy = 0.0f32;

            for ky in 0..3u32 {
                for kx in 0..3u32 {
                    let sx = (x as i32 + kx as i32 - 1).clamp(0, w as i32 - 1) as u32;
                    let sy = (y as i32 + ky as i32 - 1).clamp(0, h as i32 - 1) as u32;

                    let (r, g, b, _) = buf.get_rgba_unchecked(sx, sy);
                    let luma = color::luma(r, g, b);

                    gx += luma * kh.get(kx, ky).unwrap_or(0.0);
                    gy += luma * kv.get(kx, ky).unwrap_or(0.0);
                }
            }

            let magnitude = (gx * gx + gy * gy).sqrt();
            out.push(magnitude.round().clamp(0.0, 255.0) as u8);
        }
    }

    Ok(out)
}

/// Detect edges with the 3x3 Sobel operator pair.
///
/// The gradient magnitude is written to all three color channels;
/// alpha is set to 255.
pub fn sobel_edges(buf: &PixelBuffer) -> FilterResult<PixelBuffer> {
    let magnitudes = sobel_magnitude(buf)?;
    let mut out = PixelBuffer::new(buf.width(), buf.height())?;

    for y in 0..buf.height() {
        for x in 0..buf.width() {
            let m = magnitudes[(y * buf.width() + x) as usize];
            out.set_rgba_unchecked(x, y, m, m, m, 255);
        }
    }

    Ok(out)
}
