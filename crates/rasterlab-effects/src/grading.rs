//! Three-way color grading
//!
//! Lift/gamma/gain wheels applied per luminance zone. Zone thresholds
//! are fixed: shadow below 0.3, highlight above 0.7, midtone between.

use crate::EffectResult;
use rasterlab_color::relative_luminance;
use rasterlab_core::{PixelBuffer, color};

/// Minimum gamma used in place of non-positive values.
const GAMMA_FLOOR: f32 = 1e-4;

/// Grade settings for one luminance zone, all per-channel (R, G, B).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneGrade {
    /// Additive bias applied after the curve, in normalized units
    pub color_bias: [f32; 3],
    /// Offset added before the gamma curve
    pub lift: [f32; 3],
    /// Per-channel gamma, 1 is neutral
    pub gamma: [f32; 3],
    /// Multiplier applied to the curved value
    pub gain: [f32; 3],
}

impl Default for ZoneGrade {
    fn default() -> Self {
        Self {
            color_bias: [0.0; 3],
            lift: [0.0; 3],
            gamma: [1.0; 3],
            gain: [1.0; 3],
        }
    }
}

/// A full three-way grade.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorGrading {
    pub shadows: ZoneGrade,
    pub midtones: ZoneGrade,
    pub highlights: ZoneGrade,
}

fn grade_channel(value: u8, grade: &ZoneGrade, channel: usize) -> u8 {
    let v = value as f32 / 255.0;
    let gamma = grade.gamma[channel].max(GAMMA_FLOOR);
    let lifted = (v + grade.lift[channel]).max(0.0);
    let curved = lifted.powf(1.0 / gamma);
    let graded = (grade.gain[channel] * curved + grade.color_bias[channel]).clamp(0.0, 1.0);
    color::clamp_u8(graded * 255.0)
}

/// Apply a three-way grade.
///
/// Each pixel is classified by WCAG relative luminance into one zone,
/// then that zone's lift/gamma/gain runs on each color channel:
/// `clamp(gain * (v + lift)^(1/gamma) + bias, 0, 1)`. Alpha passes
/// through.
pub fn apply_grading(buf: &PixelBuffer, grading: &ColorGrading) -> EffectResult<PixelBuffer> {
    let mut out = PixelBuffer::new(buf.width(), buf.height())?;

    for y in 0..buf.height() {
        for x in 0..buf.width() {
            let (r, g, b, a) = buf.get_rgba_unchecked(x, y);
            let lum = relative_luminance(r, g, b);

            let zone = if lum < 0.3 {
                &grading.shadows
            } else if lum > 0.7 {
                &grading.highlights
            } else {
                &grading.midtones
            };

            out.set_rgba_unchecked(
                x,
                y,
                grade_channel(r, zone, 0),
                grade_channel(g, zone, 1),
                grade_channel(b, zone, 2),
                a,
            );
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_zone_buffer() -> PixelBuffer {
        // One dark, one mid, one bright column
        let mut buf = PixelBuffer::new(3, 2).unwrap();
        for y in 0..2 {
            buf.set_rgba_unchecked(0, y, 30, 30, 30, 255);
            buf.set_rgba_unchecked(1, y, 150, 150, 150, 255);
            buf.set_rgba_unchecked(2, y, 240, 240, 240, 255);
        }
        buf
    }

    // ========== grading tests ==========

    #[test]
    fn test_default_grade_is_identity() {
        let buf = three_zone_buffer();
        let out = apply_grading(&buf, &ColorGrading::default()).unwrap();
        assert_eq!(out.data(), buf.data());
    }

    #[test]
    fn test_shadow_grade_only_touches_shadows() {
        let buf = three_zone_buffer();
        let grading = ColorGrading {
            shadows: ZoneGrade {
                gain: [2.0, 2.0, 2.0],
                ..ZoneGrade::default()
            },
            ..ColorGrading::default()
        };
        let out = apply_grading(&buf, &grading).unwrap();
        assert_eq!(out.get_rgba(0, 0).unwrap().0, 60);
        assert_eq!(out.get_rgba(1, 0).unwrap().0, 150);
        assert_eq!(out.get_rgba(2, 0).unwrap().0, 240);
    }

    #[test]
    fn test_highlight_bias_shifts_color() {
        let buf = three_zone_buffer();
        let grading = ColorGrading {
            highlights: ZoneGrade {
                color_bias: [0.1, 0.0, -0.1],
                ..ZoneGrade::default()
            },
            ..ColorGrading::default()
        };
        let out = apply_grading(&buf, &grading).unwrap();
        let (r, g, b, _) = out.get_rgba(2, 0).unwrap();
        assert!(r > g);
        assert!(b < g);
    }

    #[test]
    fn test_midtone_gamma_brightens() {
        let buf = three_zone_buffer();
        let grading = ColorGrading {
            midtones: ZoneGrade {
                gamma: [2.0, 2.0, 2.0],
                ..ZoneGrade::default()
            },
            ..ColorGrading::default()
        };
        let out = apply_grading(&buf, &grading).unwrap();
        assert!(out.get_rgba(1, 0).unwrap().0 > 150);
    }

    #[test]
    fn test_non_positive_gamma_clamped_not_rejected() {
        let buf = three_zone_buffer();
        let grading = ColorGrading {
            midtones: ZoneGrade {
                gamma: [0.0, -1.0, 1.0],
                ..ZoneGrade::default()
            },
            ..ColorGrading::default()
        };
        // Must not panic or error; the curve degenerates to a step
        let out = apply_grading(&buf, &grading).unwrap();
        let (r, _, b, _) = out.get_rgba(1, 0).unwrap();
        assert!(r == 0 || r == 255);
        assert_eq!(b, 150);
    }

    #[test]
    fn test_grading_clamps_output() {
        let buf = three_zone_buffer();
        let grading = ColorGrading {
            highlights: ZoneGrade {
                gain: [5.0, 5.0, 5.0],
                ..ZoneGrade::default()
            },
            ..ColorGrading::default()
        };
        let out = apply_grading(&buf, &grading).unwrap();
        assert_eq!(out.get_rgba(2, 0).unwrap().0, 255);
    }

    #[test]
    fn test_grading_preserves_alpha() {
        let mut buf = three_zone_buffer();
        buf.set_rgba_unchecked(1, 1, 150, 150, 150, 33);
        let grading = ColorGrading {
            midtones: ZoneGrade {
                gain: [1.5, 1.5, 1.5],
                ..ZoneGrade::default()
            },
            ..ColorGrading::default()
        };
        let out = apply_grading(&buf, &grading).unwrap();
        assert_eq!(out.get_rgba(1, 1).unwrap().3, 33);
    }
}
