//! Accessibility auditing
//!
//! WCAG contrast auditing over palette pairs and color-blindness
//! simulation via fixed 3x3 linear transforms.

use crate::colorspace::contrast_ratio;
use crate::palette::PaletteEntry;
use rasterlab_core::color::to_hex;

/// WCAG conformance level for a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WcagLevel {
    /// Ratio >= 7.0
    Aaa,
    /// Ratio >= 4.5
    Aa,
    /// Ratio below 4.5
    Fail,
}

impl WcagLevel {
    /// Classify a contrast ratio.
    pub fn from_ratio(ratio: f32) -> Self {
        if ratio >= 7.0 {
            WcagLevel::Aaa
        } else if ratio >= 4.5 {
            WcagLevel::Aa
        } else {
            WcagLevel::Fail
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WcagLevel::Aaa => "AAA",
            WcagLevel::Aa => "AA",
            WcagLevel::Fail => "fail",
        }
    }
}

/// Contrast audit result for one palette pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastPair {
    pub color_a: String,
    pub color_b: String,
    pub ratio: f32,
    pub level: WcagLevel,
}

/// Color vision deficiency type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorBlindness {
    Protanopia,
    Deuteranopia,
    Tritanopia,
}

impl ColorBlindness {
    /// Row-major 3x3 transform approximating the deficiency.
    fn matrix(self) -> [[f32; 3]; 3] {
        match self {
            ColorBlindness::Protanopia => [
                [0.567, 0.433, 0.0],
                [0.558, 0.442, 0.0],
                [0.0, 0.242, 0.758],
            ],
            ColorBlindness::Deuteranopia => [
                [0.625, 0.375, 0.0],
                [0.700, 0.300, 0.0],
                [0.0, 0.300, 0.700],
            ],
            ColorBlindness::Tritanopia => [
                [0.950, 0.050, 0.0],
                [0.0, 0.433, 0.567],
                [0.0, 0.475, 0.525],
            ],
        }
    }
}

/// Simulated appearance of one palette entry under each deficiency.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedEntry {
    pub original: String,
    pub protanopia: String,
    pub deuteranopia: String,
    pub tritanopia: String,
}

/// Accessibility audit for a palette.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessibilityReport {
    /// All pairwise contrast ratios, ranked descending by ratio
    pub contrast_ratios: Vec<ContrastPair>,
    /// Per-entry color-blindness simulation
    pub color_blindness: Vec<SimulatedEntry>,
}

/// Apply a deficiency transform to a single color.
pub fn simulate_color_blindness(r: u8, g: u8, b: u8, kind: ColorBlindness) -> (u8, u8, u8) {
    let m = kind.matrix();
    let v = [r as f32, g as f32, b as f32];
    let mut out = [0u8; 3];
    for (i, row) in m.iter().enumerate() {
        let sum = row[0] * v[0] + row[1] * v[1] + row[2] * v[2];
        out[i] = sum.round().clamp(0.0, 255.0) as u8;
    }
    (out[0], out[1], out[2])
}

/// Audit all palette pairs and simulate each entry.
pub fn audit_accessibility(palette: &[PaletteEntry]) -> AccessibilityReport {
    let mut contrast_ratios = Vec::new();
    for i in 0..palette.len() {
        for j in (i + 1)..palette.len() {
            let ratio = contrast_ratio(palette[i].rgb(), palette[j].rgb());
            contrast_ratios.push(ContrastPair {
                color_a: palette[i].hex.clone(),
                color_b: palette[j].hex.clone(),
                ratio,
                level: WcagLevel::from_ratio(ratio),
            });
        }
    }
    contrast_ratios.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));

    let color_blindness = palette
        .iter()
        .map(|entry| {
            let (pr, pg, pb) =
                simulate_color_blindness(entry.r, entry.g, entry.b, ColorBlindness::Protanopia);
            let (dr, dg, db) =
                simulate_color_blindness(entry.r, entry.g, entry.b, ColorBlindness::Deuteranopia);
            let (tr, tg, tb) =
                simulate_color_blindness(entry.r, entry.g, entry.b, ColorBlindness::Tritanopia);
            SimulatedEntry {
                original: entry.hex.clone(),
                protanopia: to_hex(pr, pg, pb),
                deuteranopia: to_hex(dr, dg, db),
                tritanopia: to_hex(tr, tg, tb),
            }
        })
        .collect();

    AccessibilityReport {
        contrast_ratios,
        color_blindness,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wcag_levels() {
        assert_eq!(WcagLevel::from_ratio(21.0), WcagLevel::Aaa);
        assert_eq!(WcagLevel::from_ratio(7.0), WcagLevel::Aaa);
        assert_eq!(WcagLevel::from_ratio(5.0), WcagLevel::Aa);
        assert_eq!(WcagLevel::from_ratio(2.0), WcagLevel::Fail);
    }

    #[test]
    fn test_audit_ranked_descending() {
        let palette = vec![
            PaletteEntry::new(255, 255, 255, 0.5),
            PaletteEntry::new(0, 0, 0, 0.3),
            PaletteEntry::new(128, 128, 128, 0.2),
        ];
        let report = audit_accessibility(&palette);
        assert_eq!(report.contrast_ratios.len(), 3); // 3 choose 2
        for pair in report.contrast_ratios.windows(2) {
            assert!(pair[0].ratio >= pair[1].ratio);
        }
        // White/black tops the ranking at 21
        assert!((report.contrast_ratios[0].ratio - 21.0).abs() < 0.01);
        assert_eq!(report.contrast_ratios[0].level, WcagLevel::Aaa);
    }

    #[test]
    fn test_simulation_preserves_gray() {
        // All three matrices have unit row sums, so gray maps near gray
        for kind in [
            ColorBlindness::Protanopia,
            ColorBlindness::Deuteranopia,
            ColorBlindness::Tritanopia,
        ] {
            let (r, g, b) = simulate_color_blindness(128, 128, 128, kind);
            assert!((r as i32 - 128).abs() <= 1);
            assert!((g as i32 - 128).abs() <= 1);
            assert!((b as i32 - 128).abs() <= 1);
        }
    }

    #[test]
    fn test_protanopia_collapses_red() {
        // A protanope sees pure red as a dull yellow-brown: red and green
        // channels converge
        let (r, g, _) = simulate_color_blindness(255, 0, 0, ColorBlindness::Protanopia);
        assert!((r as i32 - g as i32).abs() < 10);
    }

    #[test]
    fn test_simulation_per_entry() {
        let palette = vec![PaletteEntry::new(255, 0, 0, 1.0)];
        let report = audit_accessibility(&palette);
        assert_eq!(report.color_blindness.len(), 1);
        assert_eq!(report.color_blindness[0].original, "#ff0000");
        assert!(report.contrast_ratios.is_empty());
    }
}
