//! Spatial effects
//!
//! Radial vignette and the noise trio (reduction, sharpen, grain).
//! All slider parameters run 0 to 100 and are clamped on entry.

use crate::FilterResult;
use crate::convolve::gaussian_blur;
use crate::sharpen::unsharp_mask;
use rand::Rng;
use rasterlab_core::{PixelBuffer, color};

/// Vignette parameters, all sliders in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VignetteOptions {
    /// Darkening strength at the frame edge
    pub intensity: f32,
    /// Radius of the untouched center region
    pub size: f32,
    /// 0 follows the frame aspect (elliptical), 100 is circular
    pub roundness: f32,
    /// Width of the fade band beyond `size`
    pub feather: f32,
}

impl Default for VignetteOptions {
    fn default() -> Self {
        Self {
            intensity: 50.0,
            size: 50.0,
            roundness: 100.0,
            feather: 30.0,
        }
    }
}

/// Noise pipeline parameters, all sliders in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NoiseOptions {
    /// Blur-blend strength for noise reduction
    pub reduction: f32,
    /// Unsharp amount applied after reduction
    pub sharpen: f32,
    /// Additive film grain strength
    pub grain: f32,
}

fn slider(value: f32) -> f32 {
    if value.is_finite() { value.clamp(0.0, 100.0) } else { 0.0 }
}

/// Darken the frame edges with a radial vignette.
///
/// The multiplier is 1 while the normalized center distance is within
/// `size`, then fades linearly to `1 - intensity` across the feather
/// band. Distance is normalized by the center-to-corner distance.
pub fn vignette(buf: &PixelBuffer, opts: &VignetteOptions) -> FilterResult<PixelBuffer> {
    let intensity = slider(opts.intensity) / 100.0;
    let size = slider(opts.size) / 100.0;
    let roundness = slider(opts.roundness) / 100.0;
    let feather = slider(opts.feather) / 100.0;

    let w = buf.width();
    let h = buf.height();
    let cx = (w as f32 - 1.0) / 2.0;
    let cy = (h as f32 - 1.0) / 2.0;
    let corner = (cx * cx + cy * cy).sqrt().max(1.0);

    let mut out = PixelBuffer::new(w, h)?;

    for y in 0..h {
        for x in 0..w {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;

            let circular = (dx * dx + dy * dy).sqrt() / corner;
            // Elliptical distance follows the frame aspect, corner = 1
            let ex = dx / cx.max(0.5);
            let ey = dy / cy.max(0.5);
            let elliptical = (ex * ex + ey * ey).sqrt() / std::f32::consts::SQRT_2;
            let d = elliptical + (circular - elliptical) * roundness;

            let multiplier = if d <= size {
                1.0
            } else if feather > 0.0 && d < size + feather {
                1.0 - intensity * (d - size) / feather
            } else {
                1.0 - intensity
            };

            let (r, g, b, a) = buf.get_rgba_unchecked(x, y);
            out.set_rgba_unchecked(
                x,
                y,
                color::clamp_u8(r as f32 * multiplier),
                color::clamp_u8(g as f32 * multiplier),
                color::clamp_u8(b as f32 * multiplier),
                a,
            );
        }
    }

    Ok(out)
}

/// Reduce noise by blending toward a 3x3 Gaussian blur.
///
/// `reduction` of 0 returns a copy; 100 returns the fully blurred image.
pub fn reduce_noise(buf: &PixelBuffer, reduction: f32) -> FilterResult<PixelBuffer> {
    let fraction = slider(reduction) / 100.0;
    if fraction == 0.0 {
        return Ok(buf.clone());
    }

    let blurred = gaussian_blur(buf, 1)?;
    let mut out = PixelBuffer::new(buf.width(), buf.height())?;

    for y in 0..buf.height() {
        for x in 0..buf.width() {
            let (r, g, b, a) = buf.get_rgba_unchecked(x, y);
            let (br, bg, bb, _) = blurred.get_rgba_unchecked(x, y);

            let blend =
                |orig: u8, blur: u8| color::clamp_u8(orig as f32 + (blur as f32 - orig as f32) * fraction);

            out.set_rgba_unchecked(x, y, blend(r, br), blend(g, bg), blend(b, bb), a);
        }
    }

    Ok(out)
}

/// Add uniform film grain, `(rand - 0.5) * intensity * 50` per channel.
///
/// Each color channel draws its own offset, giving chromatic rather
/// than luminance noise. Alpha is untouched.
pub fn grain(buf: &PixelBuffer, intensity: f32) -> FilterResult<PixelBuffer> {
    let strength = slider(intensity) / 100.0;
    if strength == 0.0 {
        return Ok(buf.clone());
    }

    let mut rng = rand::rng();
    let mut out = PixelBuffer::new(buf.width(), buf.height())?;

    for y in 0..buf.height() {
        for x in 0..buf.width() {
            let (r, g, b, a) = buf.get_rgba_unchecked(x, y);
            let mut jitter = || (rng.random::<f32>() - 0.5) * strength * 50.0;
            out.set_rgba_unchecked(
                x,
                y,
                color::clamp_u8(r as f32 + jitter()),
                color::clamp_u8(g as f32 + jitter()),
                color::clamp_u8(b as f32 + jitter()),
                a,
            );
        }
    }

    Ok(out)
}

/// Run the noise pipeline: reduction, then sharpen, then grain.
pub fn apply_noise(buf: &PixelBuffer, opts: &NoiseOptions) -> FilterResult<PixelBuffer> {
    let mut result = reduce_noise(buf, opts.reduction)?;
    let sharpen = slider(opts.sharpen);
    if sharpen > 0.0 {
        result = unsharp_mask(&result, sharpen / 100.0, 1)?;
    }
    if slider(opts.grain) > 0.0 {
        result = grain(&result, opts.grain)?;
    }
    Ok(result)
}
