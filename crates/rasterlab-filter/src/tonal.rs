//! Tonal adjustment pipeline
//!
//! Parameterized per-pixel adjustments applied in a fixed order, since
//! later stages operate on already-adjusted values:
//!
//! brightness+contrast, saturation+hue, gamma, exposure,
//! highlights/shadows, whites/blacks, clarity, vibrance, warmth/tint,
//! then the optional noise pipeline and vignette.
//!
//! All sliders are clamped to their documented range on entry, so an
//! out-of-range value behaves like the nearest boundary value.

use crate::FilterResult;
use crate::sharpen::unsharp_mask;
use crate::spatial::{NoiseOptions, VignetteOptions, apply_noise, vignette};
use rasterlab_color::{hsl_to_rgb, rgb_to_hsl};
use rasterlab_core::{PixelBuffer, color};

/// Tonal adjustment parameters.
///
/// Every field defaults to its no-op value. Sliders run -100 to 100
/// except `hue` (-180 to 180 degrees) and `gamma` (0.1 to 10, 1 is
/// neutral).
#[derive(Debug, Clone, PartialEq)]
pub struct TonalOptions {
    pub brightness: f32,
    pub contrast: f32,
    pub saturation: f32,
    /// Hue rotation in degrees
    pub hue: f32,
    pub gamma: f32,
    pub exposure: f32,
    pub highlights: f32,
    pub shadows: f32,
    pub whites: f32,
    pub blacks: f32,
    pub clarity: f32,
    pub vibrance: f32,
    pub warmth: f32,
    pub tint: f32,
    /// Optional noise pipeline (reduction, sharpen, grain)
    pub noise: Option<NoiseOptions>,
    /// Optional vignette, applied last
    pub vignette: Option<VignetteOptions>,
}

impl Default for TonalOptions {
    fn default() -> Self {
        Self {
            brightness: 0.0,
            contrast: 0.0,
            saturation: 0.0,
            hue: 0.0,
            gamma: 1.0,
            exposure: 0.0,
            highlights: 0.0,
            shadows: 0.0,
            whites: 0.0,
            blacks: 0.0,
            clarity: 0.0,
            vibrance: 0.0,
            warmth: 0.0,
            tint: 0.0,
            noise: None,
            vignette: None,
        }
    }
}

fn param(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_finite() { value.clamp(min, max) } else { fallback }
}

fn map_rgb(buf: &PixelBuffer, mut f: impl FnMut(u8, u8, u8) -> (u8, u8, u8)) -> FilterResult<PixelBuffer> {
    let mut out = PixelBuffer::new(buf.width(), buf.height())?;
    for y in 0..buf.height() {
        for x in 0..buf.width() {
            let (r, g, b, a) = buf.get_rgba_unchecked(x, y);
            let (r, g, b) = f(r, g, b);
            out.set_rgba_unchecked(x, y, r, g, b, a);
        }
    }
    Ok(out)
}

/// Adjust brightness and contrast in one pass.
///
/// `v' = (v + brightness*2.55 - 128) * (contrast+100)/100 + 128`
pub fn adjust_brightness_contrast(
    buf: &PixelBuffer,
    brightness: f32,
    contrast: f32,
) -> FilterResult<PixelBuffer> {
    let brightness = param(brightness, -100.0, 100.0, 0.0);
    let contrast = param(contrast, -100.0, 100.0, 0.0);
    let offset = brightness * 2.55;
    let scale = (contrast + 100.0) / 100.0;

    map_rgb(buf, |r, g, b| {
        let apply = |v: u8| color::clamp_u8((v as f32 + offset - 128.0) * scale + 128.0);
        (apply(r), apply(g), apply(b))
    })
}

/// Rotate hue and scale saturation.
///
/// Hue rotation goes through HSL. Saturation mixes each channel toward
/// the pixel's BT.601 luma, so -100 converges on the luma gray rather
/// than the HSL lightness gray.
pub fn adjust_saturation_hue(
    buf: &PixelBuffer,
    saturation: f32,
    hue: f32,
) -> FilterResult<PixelBuffer> {
    let factor = (param(saturation, -100.0, 100.0, 0.0) + 100.0) / 100.0;
    let hue = param(hue, -180.0, 180.0, 0.0);

    map_rgb(buf, |r, g, b| {
        let (r, g, b) = if hue != 0.0 {
            let mut hsl = rgb_to_hsl(r, g, b);
            hsl.h = (hsl.h + hue).rem_euclid(360.0);
            hsl_to_rgb(hsl)
        } else {
            (r, g, b)
        };

        if factor == 1.0 {
            return (r, g, b);
        }
        let luma = color::luma(r, g, b);
        let mix = |v: u8| color::clamp_u8(luma + (v as f32 - luma) * factor);
        (mix(r), mix(g), mix(b))
    })
}

/// Apply gamma correction, `v' = 255 * (v/255)^(1/gamma)`.
///
/// Gamma above 1 lightens; below 1 darkens. Values are clamped to
/// [0.1, 10] to keep the exponent finite.
pub fn adjust_gamma(buf: &PixelBuffer, gamma: f32) -> FilterResult<PixelBuffer> {
    let gamma = param(gamma, 0.1, 10.0, 1.0);
    if gamma == 1.0 {
        return Ok(buf.clone());
    }
    let inv_gamma = 1.0 / gamma;

    // 256-entry LUT, the mapping only depends on the channel value
    let mut lut = [0u8; 256];
    for (i, slot) in lut.iter_mut().enumerate() {
        *slot = color::clamp_u8(255.0 * (i as f32 / 255.0).powf(inv_gamma));
    }

    map_rgb(buf, |r, g, b| {
        (lut[r as usize], lut[g as usize], lut[b as usize])
    })
}

/// Apply exposure compensation, `v' = v * 2^(exposure/100)`.
pub fn adjust_exposure(buf: &PixelBuffer, exposure: f32) -> FilterResult<PixelBuffer> {
    let exposure = param(exposure, -100.0, 100.0, 0.0);
    let scale = (exposure / 100.0).exp2();

    map_rgb(buf, |r, g, b| {
        let apply = |v: u8| color::clamp_u8(v as f32 * scale);
        (apply(r), apply(g), apply(b))
    })
}

/// Recover or push highlights and shadows.
///
/// Pixels with luma above 0.5 are scaled by a highlights factor that
/// grows with luma; pixels at or below 0.5 by a shadows factor that
/// grows with darkness. A pixel at exactly mid-gray is untouched.
pub fn adjust_highlights_shadows(
    buf: &PixelBuffer,
    highlights: f32,
    shadows: f32,
) -> FilterResult<PixelBuffer> {
    let highlights = param(highlights, -100.0, 100.0, 0.0) / 100.0;
    let shadows = param(shadows, -100.0, 100.0, 0.0) / 100.0;

    map_rgb(buf, |r, g, b| {
        let lum = color::luma(r, g, b) / 255.0;
        let factor = if lum > 0.5 {
            1.0 + highlights * 2.0 * (lum - 0.5)
        } else {
            1.0 + shadows * 2.0 * (0.5 - lum)
        };
        let apply = |v: u8| color::clamp_u8(v as f32 * factor);
        (apply(r), apply(g), apply(b))
    })
}

/// Stretch the white and black points.
///
/// Whites lift bright values proportionally to how bright they already
/// are; blacks lift (or crush) dark values proportionally to how dark
/// they are.
pub fn adjust_whites_blacks(
    buf: &PixelBuffer,
    whites: f32,
    blacks: f32,
) -> FilterResult<PixelBuffer> {
    let whites = param(whites, -100.0, 100.0, 0.0) / 100.0;
    let blacks = param(blacks, -100.0, 100.0, 0.0) / 100.0;

    map_rgb(buf, |r, g, b| {
        let apply = |v: u8| {
            let v = v as f32;
            let v = v + whites * (v / 255.0) * 50.0;
            let v = v + blacks * (1.0 - v / 255.0) * 50.0;
            color::clamp_u8(v)
        };
        (apply(r), apply(g), apply(b))
    })
}

/// Boost saturation weighted toward the least saturated pixels.
///
/// `s' = s * (1 + (vibrance/100) * (1 - s))`, so already vivid pixels
/// move less and neutral grays stay neutral.
pub fn adjust_vibrance(buf: &PixelBuffer, vibrance: f32) -> FilterResult<PixelBuffer> {
    let vibrance = param(vibrance, -100.0, 100.0, 0.0) / 100.0;

    map_rgb(buf, |r, g, b| {
        let mut hsl = rgb_to_hsl(r, g, b);
        let adjust = vibrance * (1.0 - hsl.s);
        hsl.s = (hsl.s * (1.0 + adjust)).clamp(0.0, 1.0);
        hsl_to_rgb(hsl)
    })
}

/// Shift color temperature and green-magenta tint.
///
/// Warmth nudges R up, G up half as much and B down; tint trades R
/// against G. Magnitudes at full slider: warmth 20/10/-20, tint 15/-15.
pub fn adjust_warmth_tint(buf: &PixelBuffer, warmth: f32, tint: f32) -> FilterResult<PixelBuffer> {
    let warmth = param(warmth, -100.0, 100.0, 0.0) / 100.0;
    let tint = param(tint, -100.0, 100.0, 0.0) / 100.0;
    let dr = warmth * 20.0 + tint * 15.0;
    let dg = warmth * 10.0 - tint * 15.0;
    let db = -warmth * 20.0;

    map_rgb(buf, |r, g, b| {
        (
            color::clamp_u8(r as f32 + dr),
            color::clamp_u8(g as f32 + dg),
            color::clamp_u8(b as f32 + db),
        )
    })
}

/// Apply the full tonal pipeline in its fixed order.
///
/// Returns a new buffer of the same dimensions. Stages at their no-op
/// value are skipped.
pub fn apply_tonal(buf: &PixelBuffer, opts: &TonalOptions) -> FilterResult<PixelBuffer> {
    let mut result = buf.clone();

    if opts.brightness != 0.0 || opts.contrast != 0.0 {
        result = adjust_brightness_contrast(&result, opts.brightness, opts.contrast)?;
    }
    if opts.saturation != 0.0 || opts.hue != 0.0 {
        result = adjust_saturation_hue(&result, opts.saturation, opts.hue)?;
    }
    if opts.gamma != 1.0 {
        result = adjust_gamma(&result, opts.gamma)?;
    }
    if opts.exposure != 0.0 {
        result = adjust_exposure(&result, opts.exposure)?;
    }
    if opts.highlights != 0.0 || opts.shadows != 0.0 {
        result = adjust_highlights_shadows(&result, opts.highlights, opts.shadows)?;
    }
    if opts.whites != 0.0 || opts.blacks != 0.0 {
        result = adjust_whites_blacks(&result, opts.whites, opts.blacks)?;
    }
    if opts.clarity != 0.0 {
        let amount = param(opts.clarity, -100.0, 100.0, 0.0) / 100.0;
        result = unsharp_mask(&result, amount, 2)?;
    }
    if opts.vibrance != 0.0 {
        result = adjust_vibrance(&result, opts.vibrance)?;
    }
    if opts.warmth != 0.0 || opts.tint != 0.0 {
        result = adjust_warmth_tint(&result, opts.warmth, opts.tint)?;
    }
    if let Some(noise) = &opts.noise {
        result = apply_noise(&result, noise)?;
    }
    if let Some(vig) = &opts.vignette {
        result = vignette(&result, vig)?;
    }

    Ok(result)
}
