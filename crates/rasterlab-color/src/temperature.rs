//! Color temperature estimation
//!
//! Estimates an apparent color temperature for a palette using a simple
//! red-versus-blue heuristic, weighted by how much each palette color
//! contributes to the image. The heuristic maps warm (red-heavy) colors to
//! high Kelvin values, which matches the original estimator this module
//! reproduces (note that photometric temperature runs the other way).

use crate::palette::PaletteEntry;

/// Named warmth bucket for an estimated temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureCategory {
    VeryWarm,
    Warm,
    Neutral,
    Cool,
    VeryCool,
}

impl TemperatureCategory {
    /// Human-readable description of the bucket.
    pub fn description(self) -> &'static str {
        match self {
            TemperatureCategory::VeryWarm => "very warm, dominated by reds and oranges",
            TemperatureCategory::Warm => "warm, leaning toward reds and yellows",
            TemperatureCategory::Neutral => "balanced between warm and cool tones",
            TemperatureCategory::Cool => "cool, leaning toward blues and greens",
            TemperatureCategory::VeryCool => "very cool, dominated by blues",
        }
    }
}

/// Estimated color temperature for an image.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTemperature {
    /// Heuristic temperature value in Kelvin
    pub kelvin: f32,
    pub category: TemperatureCategory,
    pub description: String,
}

/// Heuristic temperature of a single color.
///
/// `1500 + 3000 * (r + 0.5*g) / (b + 1)`; red pushes the value up, blue
/// pulls it down, the `+1` guards the pure-blue division.
pub fn color_temperature(r: u8, g: u8, b: u8) -> f32 {
    1500.0 + 3000.0 * (r as f32 + 0.5 * g as f32) / (b as f32 + 1.0)
}

/// Bucket a Kelvin value into its named category.
pub fn categorize(kelvin: f32) -> TemperatureCategory {
    if kelvin > 5000.0 {
        TemperatureCategory::VeryWarm
    } else if kelvin > 3500.0 {
        TemperatureCategory::Warm
    } else if kelvin > 2500.0 {
        TemperatureCategory::Neutral
    } else if kelvin >= 1500.0 {
        TemperatureCategory::Cool
    } else {
        TemperatureCategory::VeryCool
    }
}

/// Estimate the overall temperature of a palette.
///
/// Weighted mean of the per-color heuristic, weighted by channel sum so
/// bright, saturated palette entries dominate the estimate. An empty
/// palette yields a neutral estimate.
pub fn estimate_temperature(palette: &[PaletteEntry]) -> ColorTemperature {
    let mut weighted = 0.0f64;
    let mut weight_sum = 0.0f64;

    for entry in palette {
        let weight = (entry.r as f64 + entry.g as f64 + entry.b as f64).max(1.0);
        weighted += color_temperature(entry.r, entry.g, entry.b) as f64 * weight;
        weight_sum += weight;
    }

    let kelvin = if weight_sum > 0.0 {
        (weighted / weight_sum) as f32
    } else {
        3000.0
    };
    let category = categorize(kelvin);
    ColorTemperature {
        kelvin,
        category,
        description: category.description().to_string(),
    }
}
