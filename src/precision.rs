//! Angular precision required to keep a lateral error within tolerance at range.

use log::debug;
use measurements::{Angle, Length};

use crate::angle::{AngleScale, FixedAngle};
use crate::error::{FixError, FixResult};

/// Angle subtended at `range` by a chord of length `tolerance`, via the law of
/// cosines, discretized with `scale`.
///
/// Assumes `range >> tolerance`; the result is only meaningful in that regime.
pub fn estimate_precision(range: Length, tolerance: Length, scale: AngleScale) -> FixResult<FixedAngle> {
    let r = range.as_meters();
    let e = tolerance.as_meters();
    if !r.is_finite() || r <= 0.0 || !e.is_finite() || e < 0.0 {
        return Err(FixError::Geometry {
            range_m: r,
            tolerance_m: e,
        });
    }

    let argument = (2.0 * r * r - e * e) / (2.0 * r * r);
    if !(-1.0..=1.0).contains(&argument) {
        return Err(FixError::Domain { argument });
    }

    let angle = Angle::from_radians(argument.acos());
    let precision = FixedAngle::new((angle.as_degrees() * scale.get() as f64).round() as i64);
    let full_circle = scale.full_circle();
    if precision.raw() <= 0 || precision >= full_circle {
        return Err(FixError::InvalidPrecision {
            value: precision.raw(),
            full_circle: full_circle.raw(),
        });
    }

    debug!(
        "precision for range {} m, tolerance {} m: {:.*}°",
        r,
        e,
        scale.decimal_digits(),
        scale.degrees(precision)
    );
    Ok(precision)
}
