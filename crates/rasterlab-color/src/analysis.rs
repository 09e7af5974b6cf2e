//! Full color analysis
//!
//! The orchestrator for the palette & harmony analyzer: extracts the
//! palette (precise extractor first, approximate fallback), then derives
//! harmonies, temperature, mood, accessibility, recommendations and image
//! statistics into one [`ColorAnalysisResult`].
//!
//! Analysis never mutates the input buffer and holds no state between
//! calls.

use crate::accessibility::{AccessibilityReport, audit_accessibility};
use crate::colorspace::rgb_to_hsl;
use crate::error::{ColorError, ColorResult};
use crate::harmony::{HarmonySets, generate_harmonies};
use crate::mood::{MoodProfile, classify_mood};
use crate::palette::{MedianCutExtractor, PaletteEntry, PaletteExtractor, QuantizedExtractor};
use crate::recommend::{Recommendations, build_recommendations};
use crate::temperature::{ColorTemperature, estimate_temperature};
use rasterlab_core::{PixelBuffer, color};
use std::collections::HashSet;

/// Default palette size for a full analysis.
pub const DEFAULT_PALETTE_SIZE: usize = 8;

/// Whole-image color statistics, all fractions in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct ColorStatistics {
    /// Number of distinct opaque RGB values
    pub unique_colors: usize,
    /// Mean BT.601 luma
    pub avg_brightness: f32,
    /// Mean HSL saturation
    pub avg_saturation: f32,
    /// Hasler-Suesstrunk opponent-axis colorfulness
    pub colorfulness: f32,
    /// RMS contrast (standard deviation of luma)
    pub contrast: f32,
    /// Mean saturation weighted toward midtones
    pub vibrance: f32,
}

/// Everything the analyzer derives from one buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorAnalysisResult {
    pub dominant: PaletteEntry,
    pub palette: Vec<PaletteEntry>,
    pub harmony: HarmonySets,
    pub temperature: ColorTemperature,
    pub mood: MoodProfile,
    pub accessibility: AccessibilityReport,
    pub recommendations: Recommendations,
    pub statistics: ColorStatistics,
}

/// Compute whole-image statistics over the opaque pixels.
///
/// # Errors
///
/// Returns [`ColorError::EmptyImage`] if no pixel has alpha > 0.
pub fn compute_statistics(buf: &PixelBuffer) -> ColorResult<ColorStatistics> {
    let mut unique = HashSet::new();
    let mut count = 0u64;
    let mut sum_luma = 0.0f64;
    let mut sum_luma_sq = 0.0f64;
    let mut sum_sat = 0.0f64;
    let mut sum_vib = 0.0f64;
    // Opponent axes for colorfulness: rg = R-G, yb = (R+G)/2 - B
    let mut sum_rg = 0.0f64;
    let mut sum_rg_sq = 0.0f64;
    let mut sum_yb = 0.0f64;
    let mut sum_yb_sq = 0.0f64;

    for (r, g, b, a) in buf.pixels() {
        if a == 0 {
            continue;
        }
        count += 1;
        unique.insert((r, g, b));

        let luma = color::luma(r, g, b) as f64 / 255.0;
        sum_luma += luma;
        sum_luma_sq += luma * luma;

        let hsl = rgb_to_hsl(r, g, b);
        sum_sat += hsl.s as f64;
        sum_vib += (hsl.s * (1.0 - (2.0 * hsl.l - 1.0).abs())) as f64;

        let rg = (r as f64 - g as f64) / 255.0;
        let yb = ((r as f64 + g as f64) / 2.0 - b as f64) / 255.0;
        sum_rg += rg;
        sum_rg_sq += rg * rg;
        sum_yb += yb;
        sum_yb_sq += yb * yb;
    }

    if count == 0 {
        return Err(ColorError::EmptyImage);
    }
    let n = count as f64;

    let mean_luma = sum_luma / n;
    let var_luma = (sum_luma_sq / n - mean_luma * mean_luma).max(0.0);

    let mean_rg = sum_rg / n;
    let mean_yb = sum_yb / n;
    let var_rg = (sum_rg_sq / n - mean_rg * mean_rg).max(0.0);
    let var_yb = (sum_yb_sq / n - mean_yb * mean_yb).max(0.0);
    let colorfulness = (var_rg + var_yb).sqrt()
        + 0.3 * (mean_rg * mean_rg + mean_yb * mean_yb).sqrt();

    Ok(ColorStatistics {
        unique_colors: unique.len(),
        avg_brightness: mean_luma as f32,
        avg_saturation: (sum_sat / n) as f32,
        colorfulness: colorfulness as f32,
        contrast: var_luma.sqrt() as f32,
        vibrance: (sum_vib / n) as f32,
    })
}

/// Run a full color analysis with an explicit palette extractor.
pub fn analyze_colors_with(
    extractor: &dyn PaletteExtractor,
    buf: &PixelBuffer,
    max_colors: usize,
) -> ColorResult<ColorAnalysisResult> {
    let palette = extractor.extract(buf, max_colors)?;
    let dominant = palette.first().cloned().ok_or(ColorError::EmptyImage)?;

    let harmony = generate_harmonies(dominant.r, dominant.g, dominant.b);
    let temperature = estimate_temperature(&palette);
    let mood = classify_mood(&palette);
    let accessibility = audit_accessibility(&palette);
    let statistics = compute_statistics(buf)?;
    let recommendations = build_recommendations(&palette, &statistics);

    Ok(ColorAnalysisResult {
        dominant,
        palette,
        harmony,
        temperature,
        mood,
        accessibility,
        recommendations,
        statistics,
    })
}

/// Run a full color analysis with the default extractor selection.
///
/// The precise median-cut extractor runs first; if it fails the
/// approximate quantized extractor takes over.
pub fn analyze_colors(buf: &PixelBuffer) -> ColorResult<ColorAnalysisResult> {
    match analyze_colors_with(&MedianCutExtractor, buf, DEFAULT_PALETTE_SIZE) {
        Ok(result) => Ok(result),
        Err(ColorError::EmptyImage) => Err(ColorError::EmptyImage),
        Err(_) => analyze_colors_with(
            &QuantizedExtractor::default(),
            buf,
            DEFAULT_PALETTE_SIZE,
        ),
    }
}
