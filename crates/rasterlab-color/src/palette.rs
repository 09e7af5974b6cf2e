//! Palette extraction
//!
//! Extracts a ranked set of representative colors from an image. Two
//! implementations stand behind the [`PaletteExtractor`] capability trait:
//!
//! - [`MedianCutExtractor`] - precise path; recursive box-splitting median
//!   cut over the opaque pixels
//! - [`QuantizedExtractor`] - approximate path; coarse per-channel
//!   quantization buckets ranked by population
//!
//! Fully transparent pixels (alpha 0) are excluded from all tallies.
//! Percentages are fractions of the opaque pixel count; bucket overlap means
//! they need not sum to exactly 100.

use crate::error::{ColorError, ColorResult};
use rasterlab_core::{PixelBuffer, color};
use std::collections::HashMap;

/// One ranked palette color.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteEntry {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Lowercase `#rrggbb` form of the color
    pub hex: String,
    /// Fraction of opaque image area closest to this color, in [0, 100]
    pub percentage: f32,
}

impl PaletteEntry {
    /// Build an entry from a color and an area fraction in [0, 1].
    pub fn new(r: u8, g: u8, b: u8, fraction: f32) -> Self {
        Self {
            r,
            g,
            b,
            hex: color::to_hex(r, g, b),
            percentage: fraction * 100.0,
        }
    }

    /// The color as an RGB tuple.
    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

/// Capability interface for palette extraction.
///
/// Callers pick an implementation by availability or precision needs; the
/// analysis orchestrator tries the precise extractor first and falls back
/// to the approximate one.
pub trait PaletteExtractor {
    /// Extract up to `max_colors` ranked palette entries.
    ///
    /// The returned palette is sorted descending by percentage.
    fn extract(&self, buf: &PixelBuffer, max_colors: usize) -> ColorResult<Vec<PaletteEntry>>;
}

/// Collect the opaque pixels of a buffer as RGB triples.
fn opaque_pixels(buf: &PixelBuffer) -> Vec<[u8; 3]> {
    buf.pixels()
        .filter(|&(_, _, _, a)| a > 0)
        .map(|(r, g, b, _)| [r, g, b])
        .collect()
}

// ============================================================================
// Median cut (precise path)
// ============================================================================

/// Median cut palette extraction.
///
/// Repeatedly splits the color box with the highest population-times-volume
/// priority along its longest channel at the median, until `max_colors`
/// boxes exist; each box contributes its mean color, weighted by its pixel
/// population.
#[derive(Debug, Clone, Copy, Default)]
pub struct MedianCutExtractor;

struct ColorBox {
    indices: Vec<usize>,
    min: [u8; 3],
    max: [u8; 3],
}

impl ColorBox {
    fn from_indices(pixels: &[[u8; 3]], indices: Vec<usize>) -> Self {
        let mut min = [255u8; 3];
        let mut max = [0u8; 3];
        for &idx in &indices {
            for c in 0..3 {
                min[c] = min[c].min(pixels[idx][c]);
                max[c] = max[c].max(pixels[idx][c]);
            }
        }
        Self { indices, min, max }
    }

    fn volume(&self) -> u64 {
        (0..3)
            .map(|c| (self.max[c] - self.min[c]) as u64 + 1)
            .product()
    }

    /// Priority for the split queue: population times volume, so large
    /// well-populated boxes split first.
    fn priority(&self) -> u64 {
        self.indices.len() as u64 * self.volume()
    }

    fn can_split(&self) -> bool {
        self.indices.len() >= 2 && self.volume() > 1
    }

    fn split(mut self, pixels: &[[u8; 3]]) -> (ColorBox, ColorBox) {
        // Split along the channel with the largest range, at the median
        let ranges: Vec<u8> = (0..3).map(|c| self.max[c] - self.min[c]).collect();
        let channel = if ranges[0] >= ranges[1] && ranges[0] >= ranges[2] {
            0
        } else if ranges[1] >= ranges[2] {
            1
        } else {
            2
        };

        self.indices.sort_by_key(|&idx| pixels[idx][channel]);
        let mid = self.indices.len() / 2;
        let right = self.indices.split_off(mid);
        (
            ColorBox::from_indices(pixels, self.indices),
            ColorBox::from_indices(pixels, right),
        )
    }

    fn mean_color(&self, pixels: &[[u8; 3]]) -> (u8, u8, u8) {
        let mut sum = [0u64; 3];
        for &idx in &self.indices {
            for c in 0..3 {
                sum[c] += pixels[idx][c] as u64;
            }
        }
        let n = self.indices.len().max(1) as u64;
        (
            (sum[0] / n) as u8,
            (sum[1] / n) as u8,
            (sum[2] / n) as u8,
        )
    }
}

impl PaletteExtractor for MedianCutExtractor {
    fn extract(&self, buf: &PixelBuffer, max_colors: usize) -> ColorResult<Vec<PaletteEntry>> {
        if max_colors == 0 {
            return Err(ColorError::InvalidParameters(
                "max_colors must be >= 1".into(),
            ));
        }
        let pixels = opaque_pixels(buf);
        if pixels.is_empty() {
            return Err(ColorError::EmptyImage);
        }
        let total = pixels.len() as f32;

        let mut boxes = vec![ColorBox::from_indices(
            &pixels,
            (0..pixels.len()).collect(),
        )];

        while boxes.len() < max_colors {
            // Pick the splittable box with the highest priority
            let candidate = boxes
                .iter()
                .enumerate()
                .filter(|(_, b)| b.can_split())
                .max_by_key(|(_, b)| b.priority())
                .map(|(i, _)| i);
            let Some(i) = candidate else { break };

            let (left, right) = boxes.swap_remove(i).split(&pixels);
            boxes.push(left);
            boxes.push(right);
        }

        let mut palette: Vec<PaletteEntry> = boxes
            .iter()
            .map(|b| {
                let (r, g, b_) = b.mean_color(&pixels);
                PaletteEntry::new(r, g, b_, b.indices.len() as f32 / total)
            })
            .collect();
        palette.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
        Ok(palette)
    }
}

// ============================================================================
// Coarse quantization (approximate fallback path)
// ============================================================================

/// Bucket-based palette extraction.
///
/// Each channel is quantized by a right shift (`shift` of 4 or 5 means
/// dividing by 16 or 32 and flooring) and the resulting buckets are ranked
/// by pixel population. The reported color is the bucket's floor value
/// shifted back into range.
#[derive(Debug, Clone, Copy)]
pub struct QuantizedExtractor {
    /// Per-channel quantization shift; clamped to [1, 7]
    pub shift: u8,
}

impl Default for QuantizedExtractor {
    fn default() -> Self {
        Self { shift: 5 }
    }
}

impl PaletteExtractor for QuantizedExtractor {
    fn extract(&self, buf: &PixelBuffer, max_colors: usize) -> ColorResult<Vec<PaletteEntry>> {
        if max_colors == 0 {
            return Err(ColorError::InvalidParameters(
                "max_colors must be >= 1".into(),
            ));
        }
        let shift = self.shift.clamp(1, 7) as u32;

        let mut buckets: HashMap<(u8, u8, u8), u64> = HashMap::new();
        let mut total = 0u64;
        for (r, g, b, a) in buf.pixels() {
            if a == 0 {
                continue;
            }
            total += 1;
            let key = (r >> shift, g >> shift, b >> shift);
            *buckets.entry(key).or_insert(0) += 1;
        }
        if total == 0 {
            return Err(ColorError::EmptyImage);
        }

        let mut ranked: Vec<((u8, u8, u8), u64)> = buckets.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(max_colors);

        Ok(ranked
            .into_iter()
            .map(|((rq, gq, bq), count)| {
                PaletteEntry::new(
                    rq << shift,
                    gq << shift,
                    bq << shift,
                    count as f32 / total as f32,
                )
            })
            .collect())
    }
}

/// Extract the dominant color of a buffer (first palette entry).
pub fn dominant_color(buf: &PixelBuffer) -> ColorResult<PaletteEntry> {
    let palette = QuantizedExtractor::default().extract(buf, 1)?;
    palette
        .into_iter()
        .next()
        .ok_or(ColorError::EmptyImage)
}
