//! Fixed-point bearings.
//!
//! Bearings are stored as `round(degrees * scale)` so that bin boundaries and
//! divisibility checks against the full circle are exact integer arithmetic.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{DEGREES_PER_REV, MAX_SCALE, SCALE};
use crate::error::{FixError, FixResult};

/// A discretized angle in units of `1 / scale` degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FixedAngle(i64);

impl FixedAngle {
    pub const fn new(raw: i64) -> Self {
        FixedAngle(raw)
    }

    pub const fn raw(self) -> i64 {
        self.0
    }
}

impl fmt::Display for FixedAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Fixed-point multiplier shared by every stage of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct AngleScale(i64);

impl AngleScale {
    /// Accepts powers of ten up to [`MAX_SCALE`], which keeps the full circle
    /// within `i64` and its divisors dense enough for the step search.
    pub fn new(scale: i64) -> FixResult<Self> {
        if scale <= 0 || scale > MAX_SCALE {
            return Err(FixError::InvalidScale(scale));
        }
        let mut s = scale;
        while s % 10 == 0 {
            s /= 10;
        }
        if s != 1 {
            return Err(FixError::InvalidScale(scale));
        }
        Ok(AngleScale(scale))
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    /// One revolution in discretized units.
    pub const fn full_circle(self) -> FixedAngle {
        FixedAngle(DEGREES_PER_REV * self.0)
    }

    /// Discretizes `degrees` and wraps the result into `[0, full_circle)`.
    pub fn discretize(self, degrees: f64) -> FixedAngle {
        let raw = (degrees * self.0 as f64).round() as i64;
        self.wrap(raw)
    }

    pub fn wrap(self, raw: i64) -> FixedAngle {
        FixedAngle(raw.rem_euclid(self.full_circle().raw()))
    }

    pub fn contains(self, angle: FixedAngle) -> bool {
        (0..self.full_circle().raw()).contains(&angle.raw())
    }

    pub fn degrees(self, angle: FixedAngle) -> f64 {
        angle.raw() as f64 / self.0 as f64
    }

    /// Number of decimal digits the scale resolves, used for display.
    pub fn decimal_digits(self) -> usize {
        let mut digits = 0;
        let mut s = self.0 / 10;
        while s != 0 {
            digits += 1;
            s /= 10;
        }
        digits
    }
}

impl Default for AngleScale {
    fn default() -> Self {
        AngleScale(SCALE)
    }
}

impl TryFrom<i64> for AngleScale {
    type Error = FixError;

    fn try_from(value: i64) -> FixResult<Self> {
        AngleScale::new(value)
    }
}

impl From<AngleScale> for i64 {
    fn from(scale: AngleScale) -> i64 {
        scale.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn discretize_rounds_to_nearest_unit() {
        let scale = AngleScale::default();
        assert_eq!(scale.discretize(5.00004).raw(), 50_000);
        assert_eq!(scale.discretize(5.00006).raw(), 50_001);
    }

    #[test]
    fn discretize_wraps_into_circle() {
        let scale = AngleScale::default();
        assert_eq!(scale.discretize(-0.5).raw(), 3_595_000);
        assert_eq!(scale.discretize(360.0).raw(), 0);
        assert_eq!(scale.discretize(725.0).raw(), 50_000);
        assert!(scale.contains(scale.discretize(-1e-5)));
    }

    #[test]
    fn degrees_inverts_discretize() {
        let scale = AngleScale::new(100).unwrap();
        let angle = scale.discretize(12.34);
        assert_eq!(angle.raw(), 1234);
        assert_abs_diff_eq!(scale.degrees(angle), 12.34, epsilon = 1e-12);
    }

    #[test]
    fn decimal_digits_follow_scale() {
        assert_eq!(AngleScale::default().decimal_digits(), 4);
        assert_eq!(AngleScale::new(1).unwrap().decimal_digits(), 0);
        assert_eq!(AngleScale::new(100).unwrap().decimal_digits(), 2);
    }

    #[test]
    fn rejects_non_positive_scale() {
        assert!(matches!(AngleScale::new(0), Err(FixError::InvalidScale(0))));
        assert!(AngleScale::new(-10).is_err());
    }

    #[test]
    fn scale_must_be_a_bounded_power_of_ten() {
        for scale in [1, 10, 100, 10_000, MAX_SCALE] {
            let s = AngleScale::new(scale).unwrap();
            assert_eq!(s.full_circle().raw(), 360 * scale);
        }
        for scale in [2, 25, 1_001, 999_999_937, MAX_SCALE * 10, 100_000_000_000_000_000] {
            assert!(
                matches!(AngleScale::new(scale), Err(FixError::InvalidScale(s)) if s == scale),
                "scale={}",
                scale
            );
        }
    }
}
