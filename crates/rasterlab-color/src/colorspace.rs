//! Color space conversion
//!
//! Pure, deterministic pixel-level conversions:
//! - RGB <-> HSL (hue in degrees, saturation/lightness in [0, 1])
//! - RGB <-> CMYK (standard subtractive conversion)
//! - Relative luminance and WCAG contrast ratio
//!
//! Degenerate cases are guarded explicitly: an achromatic pixel
//! (`max == min`) gets hue 0 and saturation 0, and a pure-black CMYK
//! conversion (`k == 1`) gets c = m = y = 0 instead of dividing by zero.

/// HSL color representation
///
/// - `h`: Hue in degrees, [0.0, 360.0)
/// - `s`: Saturation in [0.0, 1.0]
/// - `l`: Lightness in [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    /// Create a new HSL color
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }
}

/// CMYK color representation, all components in [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cmyk {
    pub c: f32,
    pub m: f32,
    pub y: f32,
    pub k: f32,
}

impl Cmyk {
    /// Create a new CMYK color
    pub fn new(c: f32, m: f32, y: f32, k: f32) -> Self {
        Self { c, m, y, k }
    }
}

/// Convert RGB values to HSL.
///
/// Achromatic input (`max == min`) yields hue 0 and saturation 0.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = r as f32 / 255.0;
    let g = g as f32 / 255.0;
    let b = b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l);
    }

    let delta = max - min;
    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let h = if max == r {
        ((g - b) / delta) % 6.0
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    let h = h * 60.0;
    let h = if h < 0.0 { h + 360.0 } else { h };

    Hsl::new(h, s, l)
}

/// Convert HSL values back to RGB.
///
/// Hue is taken mod 360; saturation and lightness are clamped to [0, 1].
pub fn hsl_to_rgb(hsl: Hsl) -> (u8, u8, u8) {
    let h = hsl.h.rem_euclid(360.0);
    let s = hsl.s.clamp(0.0, 1.0);
    let l = hsl.l.clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());

    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let m = l - c / 2.0;
    (
        ((r1 + m) * 255.0).round().clamp(0.0, 255.0) as u8,
        ((g1 + m) * 255.0).round().clamp(0.0, 255.0) as u8,
        ((b1 + m) * 255.0).round().clamp(0.0, 255.0) as u8,
    )
}

/// Convert RGB to CMYK.
///
/// `k = 1 - max(r, g, b)`; when `k == 1` (pure black) the chroma channels
/// are zeroed rather than divided by zero.
pub fn rgb_to_cmyk(r: u8, g: u8, b: u8) -> Cmyk {
    let r = r as f32 / 255.0;
    let g = g as f32 / 255.0;
    let b = b as f32 / 255.0;

    let k = 1.0 - r.max(g).max(b);
    if k >= 1.0 {
        return Cmyk::new(0.0, 0.0, 0.0, 1.0);
    }

    let c = (1.0 - r - k) / (1.0 - k);
    let m = (1.0 - g - k) / (1.0 - k);
    let y = (1.0 - b - k) / (1.0 - k);
    Cmyk::new(c, m, y, k)
}

/// Convert CMYK back to RGB.
pub fn cmyk_to_rgb(cmyk: Cmyk) -> (u8, u8, u8) {
    let c = cmyk.c.clamp(0.0, 1.0);
    let m = cmyk.m.clamp(0.0, 1.0);
    let y = cmyk.y.clamp(0.0, 1.0);
    let k = cmyk.k.clamp(0.0, 1.0);

    (
        (255.0 * (1.0 - c) * (1.0 - k)).round() as u8,
        (255.0 * (1.0 - m) * (1.0 - k)).round() as u8,
        (255.0 * (1.0 - y) * (1.0 - k)).round() as u8,
    )
}

/// WCAG relative luminance of an RGB color, in [0.0, 1.0].
///
/// sRGB gamma expansion followed by the 0.2126 / 0.7152 / 0.0722 weighting.
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f32 {
    fn expand(v: u8) -> f32 {
        let v = v as f32 / 255.0;
        if v <= 0.03928 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    }
    0.2126 * expand(r) + 0.7152 * expand(g) + 0.0722 * expand(b)
}

/// WCAG contrast ratio between two colors.
///
/// `(L_lighter + 0.05) / (L_darker + 0.05)`, symmetric under argument swap;
/// always in [1.0, 21.0].
pub fn contrast_ratio(a: (u8, u8, u8), b: (u8, u8, u8)) -> f32 {
    let la = relative_luminance(a.0, a.1, a.2);
    let lb = relative_luminance(b.0, b.1, b.2);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== HSL tests ==========

    #[test]
    fn test_rgb_to_hsl_primaries() {
        let red = rgb_to_hsl(255, 0, 0);
        assert!((red.h - 0.0).abs() < 0.01);
        assert!((red.s - 1.0).abs() < 0.01);
        assert!((red.l - 0.5).abs() < 0.01);

        let green = rgb_to_hsl(0, 255, 0);
        assert!((green.h - 120.0).abs() < 0.01);

        let blue = rgb_to_hsl(0, 0, 255);
        assert!((blue.h - 240.0).abs() < 0.01);
    }

    #[test]
    fn test_rgb_to_hsl_achromatic() {
        // max == min: hue and saturation are defined as 0
        for v in [0u8, 128, 255] {
            let hsl = rgb_to_hsl(v, v, v);
            assert_eq!(hsl.h, 0.0);
            assert_eq!(hsl.s, 0.0);
            assert!((hsl.l - v as f32 / 255.0).abs() < 0.01);
        }
    }

    #[test]
    fn test_hsl_roundtrip() {
        // Round trip within rounding tolerance, for a sweep of colors
        for r in (0..=255u32).step_by(51) {
            for g in (0..=255u32).step_by(51) {
                for b in (0..=255u32).step_by(51) {
                    let (r, g, b) = (r as u8, g as u8, b as u8);
                    let (r2, g2, b2) = hsl_to_rgb(rgb_to_hsl(r, g, b));
                    assert!(
                        (r as i32 - r2 as i32).abs() <= 1
                            && (g as i32 - g2 as i32).abs() <= 1
                            && (b as i32 - b2 as i32).abs() <= 1,
                        "roundtrip failed for ({r},{g},{b}) -> ({r2},{g2},{b2})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_hsl_to_rgb_hue_wrap() {
        let a = hsl_to_rgb(Hsl::new(0.0, 1.0, 0.5));
        let b = hsl_to_rgb(Hsl::new(360.0, 1.0, 0.5));
        let c = hsl_to_rgb(Hsl::new(-360.0, 1.0, 0.5));
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    // ========== CMYK tests ==========

    #[test]
    fn test_rgb_to_cmyk_black() {
        // k == 1: chroma channels must be zeroed, not NaN
        let cmyk = rgb_to_cmyk(0, 0, 0);
        assert_eq!(cmyk.c, 0.0);
        assert_eq!(cmyk.m, 0.0);
        assert_eq!(cmyk.y, 0.0);
        assert_eq!(cmyk.k, 1.0);
    }

    #[test]
    fn test_rgb_to_cmyk_white() {
        let cmyk = rgb_to_cmyk(255, 255, 255);
        assert!(cmyk.c.abs() < 0.01);
        assert!(cmyk.m.abs() < 0.01);
        assert!(cmyk.y.abs() < 0.01);
        assert!(cmyk.k.abs() < 0.01);
    }

    #[test]
    fn test_cmyk_roundtrip() {
        for (r, g, b) in [(255, 0, 0), (12, 200, 33), (128, 128, 128), (0, 0, 255)] {
            let (r2, g2, b2) = cmyk_to_rgb(rgb_to_cmyk(r, g, b));
            assert!(
                (r as i32 - r2 as i32).abs() <= 1
                    && (g as i32 - g2 as i32).abs() <= 1
                    && (b as i32 - b2 as i32).abs() <= 1,
                "roundtrip failed for ({r},{g},{b})"
            );
        }
    }

    // ========== luminance / contrast tests ==========

    #[test]
    fn test_relative_luminance_extremes() {
        assert!(relative_luminance(0, 0, 0).abs() < 1e-6);
        assert!((relative_luminance(255, 255, 255) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_contrast_ratio_white_black() {
        // Both extremes saturated: exactly 21
        let ratio = contrast_ratio((255, 255, 255), (0, 0, 0));
        assert!((ratio - 21.0).abs() < 0.01, "got {ratio}");
    }

    #[test]
    fn test_contrast_ratio_symmetric() {
        let pairs = [
            ((255, 0, 0), (0, 0, 255)),
            ((12, 34, 56), (200, 100, 50)),
            ((255, 255, 255), (128, 128, 128)),
        ];
        for (a, b) in pairs {
            let ab = contrast_ratio(a, b);
            let ba = contrast_ratio(b, a);
            assert!((ab - ba).abs() < 1e-6);
            assert!((1.0..=21.0).contains(&ab), "ratio {ab} out of range");
        }
    }

    #[test]
    fn test_contrast_ratio_same_color() {
        assert!((contrast_ratio((77, 77, 77), (77, 77, 77)) - 1.0).abs() < 1e-6);
    }
}
