//! Mood and emotion classification
//!
//! Maps palette colors to named hue buckets and unions a fixed
//! emotion/association table over the dominant and top secondary colors.
//! The table is deliberately small and static; this is a coarse heuristic,
//! not a perceptual model.

use crate::colorspace::rgb_to_hsl;
use crate::palette::PaletteEntry;

/// Maximum number of emotions/associations reported.
const MAX_TERMS: usize = 6;

/// How many secondary palette colors contribute to the profile.
const SECONDARY_COUNT: usize = 3;

/// Named color bucket used for mood classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorName {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    Pink,
    Black,
    White,
    Gray,
}

impl ColorName {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorName::Red => "red",
            ColorName::Orange => "orange",
            ColorName::Yellow => "yellow",
            ColorName::Green => "green",
            ColorName::Cyan => "cyan",
            ColorName::Blue => "blue",
            ColorName::Purple => "purple",
            ColorName::Pink => "pink",
            ColorName::Black => "black",
            ColorName::White => "white",
            ColorName::Gray => "gray",
        }
    }

    fn emotions(self) -> &'static [&'static str] {
        match self {
            ColorName::Red => &["passion", "energy", "urgency"],
            ColorName::Orange => &["enthusiasm", "warmth", "playfulness"],
            ColorName::Yellow => &["optimism", "happiness", "attention"],
            ColorName::Green => &["calm", "growth", "balance"],
            ColorName::Cyan => &["clarity", "freshness", "openness"],
            ColorName::Blue => &["trust", "serenity", "stability"],
            ColorName::Purple => &["creativity", "luxury", "mystery"],
            ColorName::Pink => &["tenderness", "romance", "youth"],
            ColorName::Black => &["power", "elegance", "formality"],
            ColorName::White => &["purity", "simplicity", "space"],
            ColorName::Gray => &["neutrality", "restraint", "sophistication"],
        }
    }

    fn associations(self) -> &'static [&'static str] {
        match self {
            ColorName::Red => &["fire", "blood", "warning signs"],
            ColorName::Orange => &["sunset", "autumn", "citrus"],
            ColorName::Yellow => &["sunlight", "gold", "caution"],
            ColorName::Green => &["nature", "forests", "renewal"],
            ColorName::Cyan => &["water", "sky", "ice"],
            ColorName::Blue => &["ocean", "night", "technology"],
            ColorName::Purple => &["royalty", "magic", "twilight"],
            ColorName::Pink => &["flowers", "candy", "spring"],
            ColorName::Black => &["night", "ink", "formal wear"],
            ColorName::White => &["snow", "paper", "minimalism"],
            ColorName::Gray => &["stone", "fog", "machinery"],
        }
    }
}

/// Mood profile for a palette.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodProfile {
    /// Bucket name of the dominant color
    pub primary: String,
    /// Bucket names of the top secondary colors
    pub secondary: Vec<String>,
    /// Union of emotion terms, capped at 6
    pub emotions: Vec<String>,
    /// Union of association terms, capped at 6
    pub associations: Vec<String>,
}

/// Classify a single color into its named bucket.
///
/// Achromatic cases are decided by lightness and saturation thresholds
/// (black l<0.08, white l>0.92, gray s<0.1), chromatic ones by hue sector.
/// Pink is a desaturated/light red.
pub fn classify_color(r: u8, g: u8, b: u8) -> ColorName {
    let hsl = rgb_to_hsl(r, g, b);
    if hsl.l < 0.08 {
        return ColorName::Black;
    }
    if hsl.l > 0.92 {
        return ColorName::White;
    }
    if hsl.s < 0.1 {
        return ColorName::Gray;
    }

    match hsl.h {
        h if h < 15.0 || h >= 345.0 => {
            if hsl.l > 0.7 {
                ColorName::Pink
            } else {
                ColorName::Red
            }
        }
        h if h < 45.0 => ColorName::Orange,
        h if h < 70.0 => ColorName::Yellow,
        h if h < 160.0 => ColorName::Green,
        h if h < 200.0 => ColorName::Cyan,
        h if h < 260.0 => ColorName::Blue,
        h if h < 310.0 => ColorName::Purple,
        _ => ColorName::Pink,
    }
}

/// Push unique terms, preserving order, up to the cap.
fn extend_unique(target: &mut Vec<String>, terms: &[&str]) {
    for &term in terms {
        if target.len() >= MAX_TERMS {
            return;
        }
        if !target.iter().any(|t| t == term) {
            target.push(term.to_string());
        }
    }
}

/// Build the mood profile for a ranked palette.
///
/// The first entry is the dominant color; the next three contribute as
/// secondary colors. Terms are unioned in rank order and de-duplicated.
pub fn classify_mood(palette: &[PaletteEntry]) -> MoodProfile {
    let mut emotions = Vec::new();
    let mut associations = Vec::new();
    let mut secondary = Vec::new();
    let mut primary = String::new();

    for (rank, entry) in palette.iter().take(1 + SECONDARY_COUNT).enumerate() {
        let name = classify_color(entry.r, entry.g, entry.b);
        if rank == 0 {
            primary = name.as_str().to_string();
        } else if !secondary.iter().any(|s| s == name.as_str()) {
            secondary.push(name.as_str().to_string());
        }
        extend_unique(&mut emotions, name.emotions());
        extend_unique(&mut associations, name.associations());
    }

    MoodProfile {
        primary,
        secondary,
        emotions,
        associations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_primaries() {
        assert_eq!(classify_color(255, 0, 0), ColorName::Red);
        assert_eq!(classify_color(0, 128, 0), ColorName::Green);
        assert_eq!(classify_color(0, 0, 255), ColorName::Blue);
        assert_eq!(classify_color(255, 165, 0), ColorName::Orange);
    }

    #[test]
    fn test_classify_achromatic() {
        assert_eq!(classify_color(0, 0, 0), ColorName::Black);
        assert_eq!(classify_color(255, 255, 255), ColorName::White);
        assert_eq!(classify_color(128, 128, 128), ColorName::Gray);
    }

    #[test]
    fn test_classify_pink_is_light_red() {
        assert_eq!(classify_color(255, 182, 193), ColorName::Pink);
    }

    #[test]
    fn test_mood_profile_caps_terms() {
        let palette = vec![
            PaletteEntry::new(255, 0, 0, 0.4),
            PaletteEntry::new(0, 0, 255, 0.3),
            PaletteEntry::new(0, 200, 0, 0.2),
            PaletteEntry::new(255, 255, 0, 0.1),
        ];
        let mood = classify_mood(&palette);
        assert_eq!(mood.primary, "red");
        assert!(mood.emotions.len() <= 6);
        assert!(mood.associations.len() <= 6);
        // No duplicates
        let mut seen = mood.emotions.clone();
        seen.dedup();
        assert_eq!(seen.len(), mood.emotions.len());
    }

    #[test]
    fn test_mood_secondary_deduplicated() {
        // Two near-identical blues must not produce "blue" twice
        let palette = vec![
            PaletteEntry::new(200, 20, 20, 0.5),
            PaletteEntry::new(0, 0, 250, 0.3),
            PaletteEntry::new(10, 10, 240, 0.2),
        ];
        let mood = classify_mood(&palette);
        assert_eq!(mood.secondary, vec!["blue".to_string()]);
    }

    #[test]
    fn test_empty_palette() {
        let mood = classify_mood(&[]);
        assert!(mood.primary.is_empty());
        assert!(mood.emotions.is_empty());
    }
}
