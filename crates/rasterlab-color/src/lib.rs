//! Rasterlab Color - Palette and color analysis
//!
//! This crate provides color conversion and analysis over RGBA buffers:
//!
//! - **Color space conversion** ([`colorspace`]): RGB <-> HSL, CMYK, WCAG luminance
//! - **Palette extraction** ([`palette`]): Median cut and quantized extractors
//! - **Harmony generation** ([`harmony`]): Complementary, triadic, tetradic sets
//! - **Temperature estimation** ([`temperature`]): Warm/cool classification in kelvin
//! - **Mood classification** ([`mood`]): Named hue buckets, emotions, associations
//! - **Accessibility** ([`accessibility`]): WCAG contrast audit, color blindness simulation
//! - **Recommendations** ([`recommend`]): Web-safe, print-safe and brand variants
//! - **Full analysis** ([`analysis`]): One-call orchestration of all of the above

pub mod accessibility;
pub mod analysis;
pub mod colorspace;
pub mod error;
pub mod harmony;
pub mod mood;
pub mod palette;
pub mod recommend;
pub mod temperature;

// Re-export core types
pub use rasterlab_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export color space types and functions
pub use colorspace::{
    // Types
    Cmyk,
    Hsl,
    // Pixel-level conversions
    cmyk_to_rgb,
    contrast_ratio,
    hsl_to_rgb,
    relative_luminance,
    rgb_to_cmyk,
    rgb_to_hsl,
};

// Re-export palette types and functions
pub use palette::{
    // Types
    MedianCutExtractor,
    PaletteEntry,
    PaletteExtractor,
    QuantizedExtractor,
    // Functions
    dominant_color,
};

// Re-export harmony types and functions
pub use harmony::{HarmonySets, generate_harmonies};

// Re-export temperature types and functions
pub use temperature::{
    ColorTemperature, TemperatureCategory, categorize, color_temperature, estimate_temperature,
};

// Re-export mood types and functions
pub use mood::{ColorName, MoodProfile, classify_color, classify_mood};

// Re-export accessibility types and functions
pub use accessibility::{
    // Types
    AccessibilityReport,
    ColorBlindness,
    ContrastPair,
    SimulatedEntry,
    WcagLevel,
    // Functions
    audit_accessibility,
    simulate_color_blindness,
};

// Re-export recommendation types and functions
pub use recommend::{
    Recommendations, build_recommendations, to_brand_color, to_print_safe, to_web_safe,
};

// Re-export analysis types and functions
pub use analysis::{
    // Types
    ColorAnalysisResult,
    ColorStatistics,
    DEFAULT_PALETTE_SIZE,
    // Functions
    analyze_colors,
    analyze_colors_with,
    compute_statistics,
};
