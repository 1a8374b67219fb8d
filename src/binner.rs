//! Partitioning of the sample mapping into equal-width angular bins.
//!
//! The bin width is the largest divisor of the full circle that does not
//! exceed the requested precision, so the bins tile the circle exactly.

use std::collections::BTreeMap;

use log::{debug, error, warn};
use serde::Serialize;

use crate::angle::{AngleScale, FixedAngle};
use crate::error::{Anomaly, FixError, FixResult};
use crate::samples::SampleMap;

/// Searches downward from `precision` for a step that divides the full circle.
pub fn find_step(precision: FixedAngle, scale: AngleScale) -> FixResult<FixedAngle> {
    let full_circle = scale.full_circle().raw();
    let invalid = || FixError::InvalidPrecision {
        value: precision.raw(),
        full_circle,
    };
    if precision.raw() < 1 || precision.raw() >= full_circle {
        return Err(invalid());
    }

    let mut step = precision.raw();
    while full_circle % step != 0 {
        step -= 1;
        if step == 0 {
            return Err(invalid());
        }
    }
    Ok(FixedAngle::new(step))
}

/// Samples grouped by the upper boundary of the bin they fall in.
///
/// A bin keyed `b` holds the samples in `(b - step, b]`. Only bins that
/// received at least one sample exist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bins {
    step: FixedAngle,
    bins: BTreeMap<FixedAngle, BTreeMap<FixedAngle, u32>>,
}

impl Bins {
    pub fn step(&self) -> FixedAngle {
        self.step
    }

    /// Number of non-empty bins.
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn get(&self, boundary: FixedAngle) -> Option<&BTreeMap<FixedAngle, u32>> {
        self.bins.get(&boundary)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FixedAngle, &BTreeMap<FixedAngle, u32>)> + '_ {
        self.bins.iter().map(|(&b, samples)| (b, samples))
    }

    /// Distinct bearings in the densest bin.
    pub fn max_len(&self) -> usize {
        self.bins.values().map(BTreeMap::len).max().unwrap_or(0)
    }

    /// Distinct bearings across all bins.
    pub fn placed(&self) -> usize {
        self.bins.values().map(BTreeMap::len).sum()
    }
}

/// Result of assigning a sample mapping to bins.
#[derive(Debug, Clone)]
pub struct Binning {
    pub bins: Bins,
    pub lost: Option<Anomaly>,
}

/// Assigns samples to bins of a fixed width.
#[derive(Debug, Clone, Copy)]
pub struct Binner {
    scale: AngleScale,
    step: FixedAngle,
}

impl Binner {
    /// Derives the bin width from `precision`.
    pub fn new(precision: FixedAngle, scale: AngleScale) -> FixResult<Self> {
        let step = find_step(precision, scale)?;
        debug!("bin width {} for precision {}", step, precision);
        Ok(Binner { scale, step })
    }

    /// Uses `step` directly; it must divide the full circle.
    pub fn with_step(step: FixedAngle, scale: AngleScale) -> FixResult<Self> {
        let full_circle = scale.full_circle().raw();
        if step.raw() < 1 || full_circle % step.raw() != 0 {
            return Err(FixError::InvalidPrecision {
                value: step.raw(),
                full_circle,
            });
        }
        Ok(Binner { scale, step })
    }

    pub fn step(&self) -> FixedAngle {
        self.step
    }

    /// Walks the samples in ascending order with a boundary cursor that only
    /// moves forward; out-of-order input would not be binned correctly.
    pub fn assign(&self, samples: &SampleMap) -> FixResult<Binning> {
        if samples.scale() != self.scale {
            return Err(FixError::ScaleMismatch {
                expected: self.scale.get(),
                found: samples.scale().get(),
            });
        }

        let full_circle = self.scale.full_circle().raw();
        let step = self.step.raw();
        let mut bins: BTreeMap<FixedAngle, BTreeMap<FixedAngle, u32>> = BTreeMap::new();
        let mut cursor = step;
        let mut placed = 0usize;
        for (angle, count) in samples.iter() {
            while angle.raw() > cursor {
                cursor += step;
            }
            if cursor > full_circle {
                error!(
                    "bearing {} is past the end of the circle ({}); remaining samples dropped",
                    angle, full_circle
                );
                break;
            }
            bins.entry(FixedAngle::new(cursor))
                .or_default()
                .insert(angle, count);
            placed += 1;
        }

        let lost = if placed != samples.len() {
            let anomaly = Anomaly::LostSamples {
                expected: samples.len(),
                placed,
            };
            warn!("{}", anomaly);
            Some(anomaly)
        } else {
            None
        };

        debug!("{} samples split into {} bins", placed, bins.len());
        Ok(Binning {
            bins: Bins {
                step: self.step,
                bins,
            },
            lost,
        })
    }
}
