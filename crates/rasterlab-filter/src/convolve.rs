//! Convolution operations
//!
//! Implements RGBA convolution with arbitrary kernels plus the blur
//! helpers built on top of it.

use crate::{FilterResult, Kernel};
use rasterlab_core::PixelBuffer;

/// Convolve an RGBA buffer with a kernel.
///
/// The color channels are convolved independently; alpha passes through
/// from the source unchanged. Uses replicate (clamp) border handling:
/// samples outside the image take the value of the nearest edge pixel.
pub fn convolve(buf: &PixelBuffer, kernel: &Kernel) -> FilterResult<PixelBuffer> {
    let w = buf.width();
    let h = buf.height();
    let kw = kernel.width();
    let kh = kernel.height();
    let kcx = kernel.center_x() as i32;
    let kcy = kernel.center_y() as i32;

    let mut out = PixelBuffer::new(w, h)?;

    for y in 0..h {
        for x in 0..w {
            let mut sum_r = 0.0f32;
            let mut sum_g = 0.0f32;
            let mut sum_b = 0.0f32;

            for ky in 0..kh {
                for kx in 0..kw {
                    let sx = x as i32 + (kx as i32 - kcx);
                    let sy = y as i32 + (ky as i32 - kcy);

                    // Clamp to image boundaries (replicate border)
                    let sx = sx.clamp(0, w as i32 - 1) as u32;
                    let sy = sy.clamp(0, h as i32 - 1) as u32;

                    let (r, g, b, _) = buf.get_rgba_unchecked(sx, sy);
                    let k = kernel.get(kx, ky).unwrap_or(0.0);

                    sum_r += r as f32 * k;
                    sum_g += g as f32 * k;
                    sum_b += b as f32 * k;
                }
            }

            let (_, _, _, a) = buf.get_rgba_unchecked(x, y);
            out.set_rgba_unchecked(
                x,
                y,
                sum_r.round().clamp(0.0, 255.0) as u8,
                sum_g.round().clamp(0.0, 255.0) as u8,
                sum_b.round().clamp(0.0, 255.0) as u8,
                a,
            );
        }
    }

    Ok(out)
}

/// Apply a Gaussian blur with the given radius.
///
/// Sigma is fixed at `radius / 3`; see [`Kernel::gaussian`].
pub fn gaussian_blur(buf: &PixelBuffer, radius: u32) -> FilterResult<PixelBuffer> {
    let kernel = Kernel::gaussian(radius)?;
    convolve(buf, &kernel)
}

/// Apply a box (mean) blur with the given kernel size.
pub fn box_blur(buf: &PixelBuffer, size: u32) -> FilterResult<PixelBuffer> {
    let kernel = Kernel::box_kernel(size)?;
    convolve(buf, &kernel)
}
