//! Artistic effects
//!
//! Each effect is a documented composition of the filtering primitives:
//! blur, unsharp mask, Sobel edges, posterization and neighborhood
//! statistics. Intensity runs 0 to 100 and is clamped on entry.

use crate::{EffectError, EffectResult};
use rasterlab_core::{PixelBuffer, color};
use rasterlab_filter::spatial::{VignetteOptions, vignette};
use rasterlab_filter::{gaussian_blur, sobel_magnitude, unsharp_mask};
use std::collections::HashMap;

/// An artistic filter selection with its strength.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArtisticFilter {
    /// Mode filter over quantized color buckets
    OilPainting { intensity: f32 },
    /// Blur, edge-preserving smoothing and posterization
    Watercolor { intensity: f32 },
    /// Grayscale color-dodge sketch
    PencilSketch { intensity: f32 },
    /// Posterization with darkened Sobel outlines
    Cartoon { intensity: f32 },
    /// Warm cast, faded contrast and a vignette
    Vintage { intensity: f32 },
    /// Local contrast boost with Reinhard-style tone mapping
    Hdr { intensity: f32 },
    /// Not implemented
    CrossProcess { intensity: f32 },
    /// Not implemented
    Orton { intensity: f32 },
    /// Not implemented
    TiltShift { intensity: f32 },
}

impl ArtisticFilter {
    /// Stable name for reporting.
    pub fn name(&self) -> &'static str {
        match self {
            Self::OilPainting { .. } => "oil_painting",
            Self::Watercolor { .. } => "watercolor",
            Self::PencilSketch { .. } => "pencil_sketch",
            Self::Cartoon { .. } => "cartoon",
            Self::Vintage { .. } => "vintage",
            Self::Hdr { .. } => "hdr",
            Self::CrossProcess { .. } => "cross_process",
            Self::Orton { .. } => "orton",
            Self::TiltShift { .. } => "tilt_shift",
        }
    }
}

fn intensity_fraction(intensity: f32) -> f32 {
    if intensity.is_finite() {
        intensity.clamp(0.0, 100.0) / 100.0
    } else {
        0.0
    }
}

fn intensity_steps(intensity: f32) -> u32 {
    (intensity_fraction(intensity) * 10.0) as u32
}

/// Apply an artistic filter.
///
/// # Errors
///
/// Returns [`EffectError::UnsupportedFilter`] for the variants without
/// an implementation (`CrossProcess`, `Orton`, `TiltShift`).
pub fn apply_artistic(buf: &PixelBuffer, filter: &ArtisticFilter) -> EffectResult<PixelBuffer> {
    match *filter {
        ArtisticFilter::OilPainting { intensity } => oil_painting(buf, intensity),
        ArtisticFilter::Watercolor { intensity } => watercolor(buf, intensity),
        ArtisticFilter::PencilSketch { intensity } => pencil_sketch(buf, intensity),
        ArtisticFilter::Cartoon { intensity } => cartoon(buf, intensity),
        ArtisticFilter::Vintage { intensity } => vintage(buf, intensity),
        ArtisticFilter::Hdr { intensity } => hdr(buf, intensity),
        ArtisticFilter::CrossProcess { .. }
        | ArtisticFilter::Orton { .. }
        | ArtisticFilter::TiltShift { .. } => Err(EffectError::UnsupportedFilter(filter.name())),
    }
}

/// Apply an artistic filter, passing unsupported selections through.
///
/// Instead of failing on an unimplemented variant, returns an unchanged
/// copy together with the filter name as a warning.
pub fn apply_artistic_or_passthrough(
    buf: &PixelBuffer,
    filter: &ArtisticFilter,
) -> EffectResult<(PixelBuffer, Option<&'static str>)> {
    match apply_artistic(buf, filter) {
        Ok(out) => Ok((out, None)),
        Err(EffectError::UnsupportedFilter(name)) => Ok((buf.clone(), Some(name))),
        Err(e) => Err(e),
    }
}

/// Quantize each color channel to `levels` evenly spaced values.
///
/// # Errors
///
/// Returns [`EffectError::InvalidParameters`] if `levels` is below 2.
pub fn posterize(buf: &PixelBuffer, levels: u32) -> EffectResult<PixelBuffer> {
    if levels < 2 {
        return Err(EffectError::InvalidParameters(
            "posterize needs at least 2 levels".into(),
        ));
    }

    let step = 255.0 / (levels - 1) as f32;
    let quantize = |v: u8| color::clamp_u8((v as f32 / step).round() * step);

    let mut out = PixelBuffer::new(buf.width(), buf.height())?;
    for y in 0..buf.height() {
        for x in 0..buf.width() {
            let (r, g, b, a) = buf.get_rgba_unchecked(x, y);
            out.set_rgba_unchecked(x, y, quantize(r), quantize(g), quantize(b), a);
        }
    }
    Ok(out)
}

/// Oil painting via a mode filter over quantized color buckets.
///
/// Each pixel scans a `intensity/10 + 1` radius neighborhood, tallies
/// neighbors into quantized buckets, and takes the mean color of the
/// most populous bucket. Cost is O(w * h * radius^2).
pub fn oil_painting(buf: &PixelBuffer, intensity: f32) -> EffectResult<PixelBuffer> {
    let radius = (intensity_steps(intensity) + 1) as i32;
    let smoothness = intensity_steps(intensity).max(1);

    let w = buf.width() as i32;
    let h = buf.height() as i32;
    let mut out = PixelBuffer::new(buf.width(), buf.height())?;

    struct Bucket {
        count: u32,
        sum_r: u32,
        sum_g: u32,
        sum_b: u32,
    }

    let mut buckets: HashMap<(u8, u8, u8), Bucket> = HashMap::new();

    for y in 0..h {
        for x in 0..w {
            buckets.clear();

            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    let sx = (x + dx).clamp(0, w - 1) as u32;
                    let sy = (y + dy).clamp(0, h - 1) as u32;
                    let (r, g, b, _) = buf.get_rgba_unchecked(sx, sy);

                    let key = (
                        r / smoothness as u8,
                        g / smoothness as u8,
                        b / smoothness as u8,
                    );
                    let bucket = buckets.entry(key).or_insert(Bucket {
                        count: 0,
                        sum_r: 0,
                        sum_g: 0,
                        sum_b: 0,
                    });
                    bucket.count += 1;
                    bucket.sum_r += r as u32;
                    bucket.sum_g += g as u32;
                    bucket.sum_b += b as u32;
                }
            }

            let (r, g, b, a) = buf.get_rgba_unchecked(x as u32, y as u32);
            // The neighborhood always contains at least the pixel itself
            let (r, g, b) = match buckets.values().max_by_key(|bucket| bucket.count) {
                Some(best) => (
                    (best.sum_r / best.count) as u8,
                    (best.sum_g / best.count) as u8,
                    (best.sum_b / best.count) as u8,
                ),
                None => (r, g, b),
            };
            out.set_rgba_unchecked(x as u32, y as u32, r, g, b, a);
        }
    }

    Ok(out)
}

/// Edge-preserving 3x3 smoothing.
///
/// Averages only the neighbors whose color is within `threshold` of the
/// center pixel, so flat regions smooth while edges stay put.
fn edge_preserving_smooth(buf: &PixelBuffer, threshold: f32) -> EffectResult<PixelBuffer> {
    let w = buf.width() as i32;
    let h = buf.height() as i32;
    let mut out = PixelBuffer::new(buf.width(), buf.height())?;

    for y in 0..h {
        for x in 0..w {
            let (cr, cg, cb, a) = buf.get_rgba_unchecked(x as u32, y as u32);
            let mut sum = [0u32; 3];
            let mut count = 0u32;

            for dy in -1..=1 {
                for dx in -1..=1 {
                    let sx = (x + dx).clamp(0, w - 1) as u32;
                    let sy = (y + dy).clamp(0, h - 1) as u32;
                    let (r, g, b, _) = buf.get_rgba_unchecked(sx, sy);

                    let dist = ((r as f32 - cr as f32).powi(2)
                        + (g as f32 - cg as f32).powi(2)
                        + (b as f32 - cb as f32).powi(2))
                    .sqrt();
                    if dist <= threshold {
                        sum[0] += r as u32;
                        sum[1] += g as u32;
                        sum[2] += b as u32;
                        count += 1;
                    }
                }
            }

            out.set_rgba_unchecked(
                x as u32,
                y as u32,
                (sum[0] / count) as u8,
                (sum[1] / count) as u8,
                (sum[2] / count) as u8,
                a,
            );
        }
    }

    Ok(out)
}

/// Watercolor: blur, edge-preserving smoothing, then posterization to
/// `intensity/10 + 4` levels per channel.
pub fn watercolor(buf: &PixelBuffer, intensity: f32) -> EffectResult<PixelBuffer> {
    let radius = (intensity_fraction(intensity) * 4.0) as u32 + 1;
    let levels = intensity_steps(intensity) + 4;

    let blurred = gaussian_blur(buf, radius)?;
    let smoothed = edge_preserving_smooth(&blurred, 60.0)?;
    posterize(&smoothed, levels)
}

/// Pencil sketch via the classic color-dodge composition.
///
/// Grayscale, invert, blur the inverted copy, then dodge the grayscale
/// base by the blurred inversion: `result = base / (1 - blend)` in
/// normalized values, clamped. The output is grayscale (R == G == B).
pub fn pencil_sketch(buf: &PixelBuffer, intensity: f32) -> EffectResult<PixelBuffer> {
    let radius = (intensity_fraction(intensity) * 4.0) as u32 + 1;

    let mut inverted = PixelBuffer::new(buf.width(), buf.height())?;
    for y in 0..buf.height() {
        for x in 0..buf.width() {
            let (r, g, b, a) = buf.get_rgba_unchecked(x, y);
            let gray = color::clamp_u8(color::luma(r, g, b));
            inverted.set_rgba_unchecked(x, y, 255 - gray, 255 - gray, 255 - gray, a);
        }
    }

    let blurred = gaussian_blur(&inverted, radius)?;
    let mut out = PixelBuffer::new(buf.width(), buf.height())?;

    for y in 0..buf.height() {
        for x in 0..buf.width() {
            let (r, g, b, a) = buf.get_rgba_unchecked(x, y);
            let base = color::luma(r, g, b) / 255.0;
            let (br, _, _, _) = blurred.get_rgba_unchecked(x, y);
            let blend = br as f32 / 255.0;

            let dodged = if blend >= 1.0 {
                1.0
            } else {
                (base / (1.0 - blend)).min(1.0)
            };
            let v = color::clamp_u8(dodged * 255.0);
            out.set_rgba_unchecked(x, y, v, v, v, a);
        }
    }

    Ok(out)
}

/// Cartoon: posterize to `intensity/10 + 3` levels, then darken along
/// Sobel edges proportionally to edge strength.
pub fn cartoon(buf: &PixelBuffer, intensity: f32) -> EffectResult<PixelBuffer> {
    let levels = intensity_steps(intensity) + 3;
    let strength = intensity_fraction(intensity);

    let posterized = posterize(buf, levels)?;
    let edges = sobel_magnitude(buf)?;

    let mut out = PixelBuffer::new(buf.width(), buf.height())?;
    for y in 0..buf.height() {
        for x in 0..buf.width() {
            let (r, g, b, a) = posterized.get_rgba_unchecked(x, y);
            let edge = edges[(y * buf.width() + x) as usize] as f32 / 255.0;
            let factor = 1.0 - edge * strength;
            out.set_rgba_unchecked(
                x,
                y,
                color::clamp_u8(r as f32 * factor),
                color::clamp_u8(g as f32 * factor),
                color::clamp_u8(b as f32 * factor),
                a,
            );
        }
    }

    Ok(out)
}

/// Vintage: warm color cast, contrast fade toward luma, then a soft
/// vignette scaled by intensity.
pub fn vintage(buf: &PixelBuffer, intensity: f32) -> EffectResult<PixelBuffer> {
    let strength = intensity_fraction(intensity);
    let fade = strength * 0.3;

    let mut cast = PixelBuffer::new(buf.width(), buf.height())?;
    for y in 0..buf.height() {
        for x in 0..buf.width() {
            let (r, g, b, a) = buf.get_rgba_unchecked(x, y);
            let r = r as f32 + strength * 30.0;
            let g = g as f32 + strength * 15.0;
            let b = b as f32 - strength * 30.0;

            let luma = color::luma(
                color::clamp_u8(r),
                color::clamp_u8(g),
                color::clamp_u8(b),
            );
            let pull = |v: f32| color::clamp_u8(v + (luma - v) * fade);
            cast.set_rgba_unchecked(x, y, pull(r), pull(g), pull(b), a);
        }
    }

    let opts = VignetteOptions {
        intensity: strength * 60.0,
        size: 40.0,
        roundness: 100.0,
        feather: 40.0,
    };
    Ok(vignette(&cast, &opts)?)
}

/// HDR look: strong unsharp mask followed by a normalized
/// Reinhard-style tone map `v' = v * (1+k) / (v+k)` on each channel.
///
/// The curve fixes 0 and 1 so nothing clips; smaller `k` (higher
/// intensity) boosts midtones harder.
pub fn hdr(buf: &PixelBuffer, intensity: f32) -> EffectResult<PixelBuffer> {
    let strength = intensity_fraction(intensity);
    let k = 1.0 - strength * 0.7;

    let sharpened = unsharp_mask(buf, 0.5 + strength, 2)?;
    let mut out = PixelBuffer::new(buf.width(), buf.height())?;

    for y in 0..buf.height() {
        for x in 0..buf.width() {
            let (r, g, b, a) = sharpened.get_rgba_unchecked(x, y);
            let map = |v: u8| {
                let v = v as f32 / 255.0;
                color::clamp_u8(v * (1.0 + k) / (v + k) * 255.0)
            };
            out.set_rgba_unchecked(x, y, map(r), map(g), map(b), a);
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_region_buffer() -> PixelBuffer {
        // Left half dark red, right half bright cyan
        let mut buf = PixelBuffer::new(8, 8).unwrap();
        for y in 0..8 {
            for x in 0..8 {
                if x < 4 {
                    buf.set_rgba_unchecked(x, y, 120, 20, 20, 255);
                } else {
                    buf.set_rgba_unchecked(x, y, 30, 220, 230, 255);
                }
            }
        }
        buf
    }

    // ========== dispatch tests ==========

    #[test]
    fn test_unsupported_filters_report() {
        let buf = two_region_buffer();
        for filter in [
            ArtisticFilter::CrossProcess { intensity: 50.0 },
            ArtisticFilter::Orton { intensity: 50.0 },
            ArtisticFilter::TiltShift { intensity: 50.0 },
        ] {
            assert!(matches!(
                apply_artistic(&buf, &filter),
                Err(EffectError::UnsupportedFilter(_))
            ));
        }
    }

    #[test]
    fn test_passthrough_returns_copy_and_warning() {
        let buf = two_region_buffer();
        let (out, warning) =
            apply_artistic_or_passthrough(&buf, &ArtisticFilter::Orton { intensity: 50.0 })
                .unwrap();
        assert_eq!(out.data(), buf.data());
        assert_eq!(warning, Some("orton"));
    }

    #[test]
    fn test_passthrough_silent_on_supported() {
        let buf = two_region_buffer();
        let (_, warning) =
            apply_artistic_or_passthrough(&buf, &ArtisticFilter::Cartoon { intensity: 50.0 })
                .unwrap();
        assert_eq!(warning, None);
    }

    // ========== posterize tests ==========

    #[test]
    fn test_posterize_two_levels() {
        let buf = two_region_buffer();
        let out = posterize(&buf, 2).unwrap();
        for (r, g, b, _) in out.pixels() {
            for v in [r, g, b] {
                assert!(v == 0 || v == 255);
            }
        }
    }

    #[test]
    fn test_posterize_rejects_single_level() {
        let buf = two_region_buffer();
        assert!(posterize(&buf, 1).is_err());
    }

    #[test]
    fn test_posterize_reduces_distinct_values() {
        let mut buf = PixelBuffer::new(16, 1).unwrap();
        for x in 0..16 {
            let v = (x * 16) as u8;
            buf.set_rgba_unchecked(x, 0, v, v, v, 255);
        }
        let out = posterize(&buf, 4).unwrap();
        let distinct: std::collections::HashSet<u8> =
            out.pixels().map(|(r, _, _, _)| r).collect();
        assert!(distinct.len() <= 4);
    }

    // ========== effect tests ==========

    #[test]
    fn test_oil_painting_flattens_regions() {
        let buf = two_region_buffer();
        let out = oil_painting(&buf, 30.0).unwrap();
        // Deep inside each half the mode filter keeps the region color
        let (r, _, _, _) = out.get_rgba(1, 4).unwrap();
        assert!(r > 100);
        let (_, g, _, _) = out.get_rgba(6, 4).unwrap();
        assert!(g > 180);
    }

    #[test]
    fn test_oil_painting_single_pixel_zero_intensity() {
        let buf = PixelBuffer::new_filled(1, 1, 44, 55, 66, 255).unwrap();
        let out = oil_painting(&buf, 0.0).unwrap();
        assert_eq!(out.get_rgba(0, 0).unwrap(), (44, 55, 66, 255));
    }

    #[test]
    fn test_pencil_sketch_is_grayscale() {
        let buf = two_region_buffer();
        let out = pencil_sketch(&buf, 50.0).unwrap();
        for (r, g, b, _) in out.pixels() {
            assert_eq!(r, g);
            assert_eq!(g, b);
        }
    }

    #[test]
    fn test_pencil_sketch_flat_region_near_white() {
        let buf = PixelBuffer::new_filled(8, 8, 80, 80, 80, 255).unwrap();
        let out = pencil_sketch(&buf, 50.0).unwrap();
        // Dodge of a flat region saturates to white
        let (r, _, _, _) = out.get_rgba(4, 4).unwrap();
        assert!(r > 240);
    }

    #[test]
    fn test_cartoon_darkens_edges() {
        let buf = two_region_buffer();
        let out = cartoon(&buf, 80.0).unwrap();
        let flat_only = posterize(&buf, 11).unwrap();
        let sum = |(r, g, b, _): (u8, u8, u8, u8)| r as u32 + g as u32 + b as u32;
        // On the boundary column the Sobel lines darken the posterized color
        assert!(sum(out.get_rgba(3, 4).unwrap()) < sum(flat_only.get_rgba(3, 4).unwrap()));
        // Deep inside a region nothing darkens
        assert_eq!(
            sum(out.get_rgba(0, 4).unwrap()),
            sum(flat_only.get_rgba(0, 4).unwrap())
        );
    }

    #[test]
    fn test_vintage_warms_and_fades() {
        let buf = PixelBuffer::new_filled(9, 9, 128, 128, 128, 255).unwrap();
        let out = vintage(&buf, 100.0).unwrap();
        let (r, _, b, _) = out.get_rgba(4, 4).unwrap();
        assert!(r > b);
    }

    #[test]
    fn test_hdr_fixes_black_and_white() {
        let mut buf = PixelBuffer::new_filled(8, 8, 0, 0, 0, 255).unwrap();
        for x in 0..8 {
            buf.set_rgba_unchecked(x, 0, 255, 255, 255, 255);
        }
        let out = hdr(&buf, 80.0).unwrap();
        assert_eq!(out.get_rgba(4, 0).unwrap().0, 255);
        assert_eq!(out.get_rgba(4, 7).unwrap().0, 0);
    }

    #[test]
    fn test_hdr_boosts_midtones() {
        let buf = PixelBuffer::new_filled(8, 8, 100, 100, 100, 255).unwrap();
        let out = hdr(&buf, 80.0).unwrap();
        let (r, _, _, _) = out.get_rgba(4, 4).unwrap();
        assert!(r > 100);
    }

    #[test]
    fn test_effects_preserve_alpha() {
        let mut buf = two_region_buffer();
        buf.set_rgba_unchecked(2, 2, 120, 20, 20, 77);
        for filter in [
            ArtisticFilter::OilPainting { intensity: 40.0 },
            ArtisticFilter::Watercolor { intensity: 40.0 },
            ArtisticFilter::PencilSketch { intensity: 40.0 },
            ArtisticFilter::Cartoon { intensity: 40.0 },
            ArtisticFilter::Vintage { intensity: 40.0 },
            ArtisticFilter::Hdr { intensity: 40.0 },
        ] {
            let out = apply_artistic(&buf, &filter).unwrap();
            assert_eq!(out.get_rgba(2, 2).unwrap().3, 77, "{}", filter.name());
        }
    }
}
