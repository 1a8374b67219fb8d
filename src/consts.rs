//! Constants used by fixed-point bearings and the default reduction run.

/// Fixed-point multiplier: one discretized unit is `1 / SCALE` degrees.
pub const SCALE: i64 = 10_000;

/// Largest accepted fixed-point multiplier.
pub const MAX_SCALE: i64 = 1_000_000_000;

/// Degrees in one revolution.
pub const DEGREES_PER_REV: i64 = 360;

/// Precision divisor used to derive the per-bin subsampling stride.
pub const DEFAULT_DENSITY_DIVISOR: f64 = 30.0;

/// Lower bound of the subsampling divisor.
pub const DEFAULT_DIVISOR_FLOOR: f64 = 1.0;

/// Entries observed fewer times than this are hidden from the INITIAL table.
pub const DEFAULT_MIN_DISPLAY_COUNT: u32 = 15;

/// Distance to the target, metres.
pub const DEFAULT_RANGE_M: f64 = 25e3;

/// Tolerable lateral error at the target, metres.
pub const DEFAULT_TOLERANCE_M: f64 = 50.0;

/// Synthetic source: measurements drawn per run.
pub const DEFAULT_SAMPLE_COUNT: usize = 10_000;
pub const DEFAULT_MEAN_DEG: f64 = 5.0;
pub const DEFAULT_STD_DEV_DEG: f64 = 0.5;
