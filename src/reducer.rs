//! Density-proportional thinning of binned bearings into display fixes.

use std::collections::BTreeSet;

use derivative::Derivative;
use itertools::Itertools;
use log::debug;
use noisy_float::prelude::{r64, R64};
use serde::{Deserialize, Serialize};

use crate::angle::{AngleScale, FixedAngle};
use crate::binner::Bins;
use crate::consts::{DEFAULT_DENSITY_DIVISOR, DEFAULT_DIVISOR_FLOOR};
use crate::error::{FixError, FixResult};

/// Heuristic knobs of the reducer.
///
/// The divisor `n` is `max(divisor_floor, min(maxN, round(precision / density_divisor)))`.
/// Larger `n` keeps fewer bearings per bin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct ReducerConfig {
    #[derivative(Default(value = "DEFAULT_DENSITY_DIVISOR"))]
    pub density_divisor: f64,
    #[derivative(Default(value = "DEFAULT_DIVISOR_FLOOR"))]
    pub divisor_floor: f64,
}

impl ReducerConfig {
    pub fn validate(&self) -> FixResult<()> {
        if !(self.density_divisor.is_finite() && self.density_divisor > 0.0) {
            return Err(FixError::InvalidConfig(format!(
                "density_divisor must be positive, got {}",
                self.density_divisor
            )));
        }
        if !(self.divisor_floor.is_finite() && self.divisor_floor > 0.0) {
            return Err(FixError::InvalidConfig(format!(
                "divisor_floor must be positive, got {}",
                self.divisor_floor
            )));
        }
        Ok(())
    }
}

/// Representative bearings in degrees, ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Fixes(BTreeSet<R64>);

impl Fixes {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, degrees: f64) -> bool {
        degrees.is_finite() && self.0.contains(&r64(degrees))
    }

    pub fn degrees(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().map(|d| d.raw())
    }

    /// Each fix paired with its distance from the previous one; the first is
    /// measured from 0°.
    pub fn with_deltas(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        std::iter::once(0.0)
            .chain(self.degrees())
            .tuple_windows()
            .map(|(previous, current)| (current, current - previous))
    }

    fn insert(&mut self, degrees: f64) {
        self.0.insert(r64(degrees));
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Reducer {
    config: ReducerConfig,
}

impl Reducer {
    pub fn new(config: ReducerConfig) -> FixResult<Self> {
        config.validate()?;
        Ok(Reducer { config })
    }

    pub fn config(&self) -> &ReducerConfig {
        &self.config
    }

    /// Divisor `n` controlling overall output density.
    pub fn target_divisor(&self, precision: FixedAngle, max_len: usize) -> f64 {
        let n = (precision.raw() as f64 / self.config.density_divisor).round();
        n.min(max_len as f64).max(self.config.divisor_floor)
    }

    pub fn reduce(&self, bins: &Bins, precision: FixedAngle, scale: AngleScale) -> Fixes {
        let max_len = bins.max_len();
        if max_len == 0 {
            return Fixes::default();
        }
        let n = self.target_divisor(precision, max_len);
        debug!("reducing {} bins, densest holds {}, divisor {}", bins.len(), max_len, n);
        reduce_with_divisor(bins, n, scale)
    }
}

/// Thins every bin with a stride proportional to how sparse it is relative to
/// the densest bin, scaled by `n`.
pub fn reduce_with_divisor(bins: &Bins, n: f64, scale: AngleScale) -> Fixes {
    let mut fixes = Fixes::default();
    let max_len = bins.max_len();
    if max_len == 0 {
        return fixes;
    }

    for (_, members) in bins.iter() {
        let size = members.len();
        if size == 0 {
            continue;
        }
        let k = (size as f64 / max_len as f64) / n;
        let advance = ((1.0 / k).round() as usize).max(1);
        if advance > size {
            if let Some(angle) = members.keys().nth(size / 2) {
                fixes.insert(scale.degrees(*angle));
            }
        } else {
            for angle in members.keys().skip(advance / 2).step_by(advance) {
                fixes.insert(scale.degrees(*angle));
            }
        }
    }
    fixes
}
