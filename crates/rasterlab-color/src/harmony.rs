//! Color harmony generation
//!
//! Generates the classic harmony sets from a base color by fixed
//! hue-rotation rules on its HSL representation. Each set is returned as
//! lowercase hex strings so UI layers can consume them directly.

use crate::colorspace::{Hsl, hsl_to_rgb, rgb_to_hsl};
use rasterlab_core::color::to_hex;

/// The harmony sets derived from a base color.
#[derive(Debug, Clone, PartialEq)]
pub struct HarmonySets {
    /// Hue shifts of -60, -30, +30, +60 degrees
    pub analogous: Vec<String>,
    /// Hue shift of +180 degrees
    pub complementary: Vec<String>,
    /// Hue shifts of +120 and +240 degrees
    pub triadic: Vec<String>,
    /// Hue shifts of +90, +180, +270 degrees
    pub tetradic: Vec<String>,
    /// Hue shifts of +150 and +210 degrees
    pub split_complementary: Vec<String>,
    /// Fixed lightness steps, hue and saturation preserved
    pub monochromatic: Vec<String>,
}

/// Rotate the hue of a base HSL color and format as hex.
fn rotated(base: Hsl, degrees: f32) -> String {
    let (r, g, b) = hsl_to_rgb(Hsl::new(base.h + degrees, base.s, base.l));
    to_hex(r, g, b)
}

/// Generate all harmony sets for a base color.
pub fn generate_harmonies(r: u8, g: u8, b: u8) -> HarmonySets {
    let base = rgb_to_hsl(r, g, b);

    let analogous = [-60.0, -30.0, 30.0, 60.0]
        .iter()
        .map(|&d| rotated(base, d))
        .collect();
    let complementary = vec![rotated(base, 180.0)];
    let triadic = vec![rotated(base, 120.0), rotated(base, 240.0)];
    let tetradic = vec![
        rotated(base, 90.0),
        rotated(base, 180.0),
        rotated(base, 270.0),
    ];
    let split_complementary = vec![rotated(base, 150.0), rotated(base, 210.0)];

    // Fixed lightness steps, skipping any step too close to the base color
    let monochromatic = [0.2f32, 0.4, 0.6, 0.8]
        .iter()
        .filter(|&&l| (l - base.l).abs() >= 0.1)
        .map(|&l| {
            let (r, g, b) = hsl_to_rgb(Hsl::new(base.h, base.s, l));
            to_hex(r, g, b)
        })
        .collect();

    HarmonySets {
        analogous,
        complementary,
        triadic,
        tetradic,
        split_complementary,
        monochromatic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complementary_of_red_is_cyan() {
        let sets = generate_harmonies(255, 0, 0);
        assert_eq!(sets.complementary, vec!["#00ffff".to_string()]);
    }

    #[test]
    fn test_triadic_of_red() {
        let sets = generate_harmonies(255, 0, 0);
        assert_eq!(sets.triadic, vec!["#00ff00".to_string(), "#0000ff".to_string()]);
    }

    #[test]
    fn test_set_sizes() {
        let sets = generate_harmonies(200, 120, 40);
        assert_eq!(sets.analogous.len(), 4);
        assert_eq!(sets.complementary.len(), 1);
        assert_eq!(sets.triadic.len(), 2);
        assert_eq!(sets.tetradic.len(), 3);
        assert_eq!(sets.split_complementary.len(), 2);
        assert!(sets.monochromatic.len() <= 4);
    }

    #[test]
    fn test_monochromatic_excludes_near_base() {
        // Base lightness 0.4 exactly: the 0.4 step must be excluded,
        // and so must any step within 0.1
        let (r, g, b) = hsl_to_rgb(Hsl::new(30.0, 0.5, 0.4));
        let base = rgb_to_hsl(r, g, b);
        let sets = generate_harmonies(r, g, b);
        for hex in &sets.monochromatic {
            let (mr, mg, mb) = rasterlab_core::color::from_hex(hex).unwrap();
            let l = rgb_to_hsl(mr, mg, mb).l;
            assert!(
                (l - base.l).abs() >= 0.08,
                "step {l} too close to base {}",
                base.l
            );
        }
    }

    #[test]
    fn test_achromatic_base_does_not_panic() {
        let sets = generate_harmonies(128, 128, 128);
        // Hue rotations of gray stay gray
        assert_eq!(sets.complementary, vec!["#808080".to_string()]);
    }
}
