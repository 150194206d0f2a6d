//! Scalar and color interpolation, and range remapping.

use crate::errors::RangeError;

/// Three color channels.
///
/// The semantics belong to the caller: RGB in [0, 255] and CMYK-style
/// [0, 100] triples both fit, which is why nothing here clamps.
pub type Channels = [f64; 3];

/// Linear interpolation between `a` and `b`.
///
/// `t` is not clamped: `t < 0` and `t > 1` extrapolate on purpose.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Component-wise [`lerp`] of two color triples, each channel rounded to
/// the nearest integer (half away from zero).
///
/// Channels are not clamped; a caller targeting 8-bit color clamps the
/// result itself, so the same function serves CMYK and deliberate
/// extrapolation.
pub fn lerp_color(from: Channels, to: Channels, t: f64) -> Channels {
    [
        lerp(from[0], to[0], t).round(),
        lerp(from[1], to[1], t).round(),
        lerp(from[2], to[2], t).round(),
    ]
}

/// Remap `value` from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// A zero-width input range would divide by zero; that fails with
/// `DegenerateRange` instead of silently producing NaN or infinity.
pub fn map_range(
    value: f64,
    in_min: f64,
    in_max: f64,
    out_min: f64,
    out_max: f64,
) -> Result<f64, RangeError> {
    if in_max == in_min {
        return Err(RangeError::DegenerateRange { in_min, in_max });
    }
    Ok((value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== lerp tests ====================

    #[test]
    fn lerp_hits_endpoints_and_midpoint() {
        assert_eq!(lerp(0.0, 100.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 100.0, 0.5), 50.0);
        assert_eq!(lerp(0.0, 100.0, 1.0), 100.0);
    }

    #[test]
    fn lerp_extrapolates_unclamped() {
        assert_eq!(lerp(0.0, 10.0, 1.5), 15.0);
        assert_eq!(lerp(0.0, 10.0, -0.5), -5.0);
    }

    // ==================== lerp_color tests ====================

    #[test]
    fn lerp_color_rounds_half_up_between_rgb() {
        let mid = lerp_color([255.0, 0.0, 0.0], [0.0, 0.0, 255.0], 0.5);
        assert_eq!(mid, [128.0, 0.0, 128.0]);
    }

    #[test]
    fn lerp_color_works_for_cmyk_ranges() {
        let mid = lerp_color([100.0, 0.0, 0.0], [0.0, 50.0, 100.0], 0.5);
        assert_eq!(mid, [50.0, 25.0, 50.0]);
    }

    #[test]
    fn lerp_color_does_not_clamp_extrapolation() {
        let wide = lerp_color([0.0, 0.0, 0.0], [200.0, 200.0, 200.0], 1.5);
        assert_eq!(wide, [300.0, 300.0, 300.0]);
        let negative = lerp_color([0.0, 0.0, 0.0], [200.0, 200.0, 200.0], -0.5);
        assert_eq!(negative, [-100.0, -100.0, -100.0]);
    }

    // ==================== map_range tests ====================

    #[test]
    fn map_range_basic() {
        assert_eq!(map_range(50.0, 0.0, 100.0, 0.0, 1.0), Ok(0.5));
        assert_eq!(map_range(0.0, 0.0, 100.0, 10.0, 20.0), Ok(10.0));
    }

    #[test]
    fn map_range_reversed_output() {
        assert_eq!(map_range(25.0, 0.0, 100.0, 1.0, 0.0), Ok(0.75));
    }

    #[test]
    fn map_range_extrapolates_outside_input() {
        assert_eq!(map_range(200.0, 0.0, 100.0, 0.0, 1.0), Ok(2.0));
    }

    #[test]
    fn map_range_rejects_degenerate_input() {
        assert_eq!(
            map_range(5.0, 10.0, 10.0, 0.0, 1.0),
            Err(RangeError::DegenerateRange {
                in_min: 10.0,
                in_max: 10.0
            })
        );
    }
}
