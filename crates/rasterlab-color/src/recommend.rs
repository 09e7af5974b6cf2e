//! Derived palette recommendations
//!
//! Web-safe and print-safe renditions of the palette, a constrained brand
//! palette, and threshold-driven improvement suggestions computed from the
//! image statistics.

use crate::analysis::ColorStatistics;
use crate::colorspace::{Hsl, cmyk_to_rgb, hsl_to_rgb, rgb_to_cmyk, rgb_to_hsl};
use crate::palette::PaletteEntry;
use rasterlab_core::color::to_hex;

/// How many palette colors feed the brand palette.
const BRAND_COUNT: usize = 5;

/// Recommendation block of an analysis result.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendations {
    /// Palette snapped to the 216-color web-safe cube
    pub web_safe: Vec<String>,
    /// Palette after a CMYK round trip (what print will actually show)
    pub print_safe: Vec<String>,
    /// Top colors constrained to brand-friendly saturation and lightness
    pub brand_colors: Vec<String>,
    /// Free-text improvement suggestions
    pub improvements: Vec<String>,
}

/// Snap one channel to the nearest multiple of 51.
#[inline]
fn web_safe_channel(v: u8) -> u8 {
    ((v as f32 / 51.0).round() * 51.0) as u8
}

/// Web-safe version of a color.
pub fn to_web_safe(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    (
        web_safe_channel(r),
        web_safe_channel(g),
        web_safe_channel(b),
    )
}

/// Print-safe version of a color (CMYK round trip).
pub fn to_print_safe(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    cmyk_to_rgb(rgb_to_cmyk(r, g, b))
}

/// Brand-palette version of a color: saturation clamped to [0.4, 0.8],
/// lightness clamped to [0.3, 0.7].
pub fn to_brand_color(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    let hsl = rgb_to_hsl(r, g, b);
    hsl_to_rgb(Hsl::new(
        hsl.h,
        hsl.s.clamp(0.4, 0.8),
        hsl.l.clamp(0.3, 0.7),
    ))
}

/// Build the recommendation block for a palette and its statistics.
pub fn build_recommendations(
    palette: &[PaletteEntry],
    stats: &ColorStatistics,
) -> Recommendations {
    let web_safe = palette
        .iter()
        .map(|e| {
            let (r, g, b) = to_web_safe(e.r, e.g, e.b);
            to_hex(r, g, b)
        })
        .collect();
    let print_safe = palette
        .iter()
        .map(|e| {
            let (r, g, b) = to_print_safe(e.r, e.g, e.b);
            to_hex(r, g, b)
        })
        .collect();
    let brand_colors = palette
        .iter()
        .take(BRAND_COUNT)
        .map(|e| {
            let (r, g, b) = to_brand_color(e.r, e.g, e.b);
            to_hex(r, g, b)
        })
        .collect();

    let mut improvements = Vec::new();
    if stats.avg_brightness < 0.3 {
        improvements.push(
            "image is dark; consider raising exposure or lifting shadows".to_string(),
        );
    }
    if stats.avg_brightness > 0.85 {
        improvements
            .push("image is very bright; highlights may be close to clipping".to_string());
    }
    if stats.contrast < 0.15 {
        improvements.push("low contrast; a contrast or clarity boost would help".to_string());
    }
    if stats.avg_saturation < 0.15 {
        improvements
            .push("colors are muted; a vibrance boost would add interest".to_string());
    }
    if stats.colorfulness < 0.1 {
        improvements.push(
            "palette is nearly monochrome; an accent color would add contrast".to_string(),
        );
    }
    if palette.len() >= 2 {
        let a = palette[0].rgb();
        let b = palette[1].rgb();
        let dist = ((a.0 as i32 - b.0 as i32).pow(2)
            + (a.1 as i32 - b.1 as i32).pow(2)
            + (a.2 as i32 - b.2 as i32).pow(2)) as f32;
        if dist.sqrt() < 30.0 {
            improvements.push(
                "top palette colors are nearly identical; the palette lacks variety".to_string(),
            );
        }
    }

    Recommendations {
        web_safe,
        print_safe,
        brand_colors,
        improvements,
    }
}
