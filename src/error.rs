//! Error and anomaly types

use std::io;

use serde::Serialize;
use thiserror::Error;

/// Result type for fix reduction operations
pub type FixResult<T> = Result<T, FixError>;

/// Errors that abort a reduction run
#[derive(Error, Debug)]
pub enum FixError {
    /// Range must be positive and tolerance non-negative
    #[error("invalid geometry: range {range_m} m, tolerance {tolerance_m} m")]
    Geometry { range_m: f64, tolerance_m: f64 },

    /// Law-of-cosines argument fell outside [-1, 1]
    #[error("arccos argument {argument} is outside [-1, 1]")]
    Domain { argument: f64 },

    /// Precision cannot be used as a bin width
    #[error("precision {value} is not usable within a circle of {full_circle} units")]
    InvalidPrecision { value: i64, full_circle: i64 },

    /// Fixed-point scale must be a power of ten within `MAX_SCALE`
    #[error("fixed-point scale must be a power of ten between 1 and 10^9, got {0}")]
    InvalidScale(i64),

    /// Discretized bearing outside [0, full circle)
    #[error("bearing {raw} lies outside [0, {full_circle})")]
    SampleOutOfCircle { raw: i64, full_circle: i64 },

    /// Sample mapping entries must be observed at least once
    #[error("bearing {raw} has a zero count")]
    ZeroCount { raw: i64 },

    /// Samples and binner disagree on the fixed-point scale
    #[error("scale mismatch: expected {expected}, found {found}")]
    ScaleMismatch { expected: i64, found: i64 },

    /// Synthetic source distribution parameters rejected
    #[error("invalid sampling distribution: {0}")]
    Distribution(#[from] rand_distr::NormalError),

    /// Configuration value out of range
    #[error("configuration error: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Conditions that are reported to the caller while the run continues
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Anomaly {
    /// Fewer samples were binned than the mapping holds
    #[error("only {placed} of {expected} samples were assigned to bins")]
    LostSamples { expected: usize, placed: usize },

    /// Synthetic source mean outside [0, 360); nothing was drawn
    #[error("peak bearing {mean_deg}° must lie within [0, 360)")]
    MeanOutOfRange { mean_deg: f64 },
}
