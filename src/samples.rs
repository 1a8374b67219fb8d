//! Sample mapping: discretized bearing → number of times it was observed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::angle::{AngleScale, FixedAngle};
use crate::error::{FixError, FixResult};

/// Ascending mapping of discretized bearings to their observation counts.
///
/// Every key lies within `[0, scale.full_circle())` and every count is
/// positive. The mapping is immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSampleMap")]
pub struct SampleMap {
    scale: AngleScale,
    counts: BTreeMap<FixedAngle, u32>,
}

#[derive(Deserialize)]
struct RawSampleMap {
    scale: AngleScale,
    counts: BTreeMap<i64, u32>,
}

impl TryFrom<RawSampleMap> for SampleMap {
    type Error = FixError;

    fn try_from(raw: RawSampleMap) -> FixResult<Self> {
        SampleMap::from_counts(raw.counts, raw.scale)
    }
}

impl SampleMap {
    pub fn empty(scale: AngleScale) -> Self {
        SampleMap {
            scale,
            counts: BTreeMap::new(),
        }
    }

    /// Accumulates real-valued bearings, wrapping each into the circle.
    pub fn from_degrees<I>(bearings: I, scale: AngleScale) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut counts = BTreeMap::new();
        for degrees in bearings {
            *counts.entry(scale.discretize(degrees)).or_insert(0) += 1;
        }
        SampleMap { scale, counts }
    }

    /// Builds a mapping from already-discretized `(bearing, count)` pairs.
    /// Repeated bearings accumulate.
    pub fn from_counts<I>(entries: I, scale: AngleScale) -> FixResult<Self>
    where
        I: IntoIterator<Item = (i64, u32)>,
    {
        let mut counts = BTreeMap::new();
        for (raw, count) in entries {
            let angle = FixedAngle::new(raw);
            if !scale.contains(angle) {
                return Err(FixError::SampleOutOfCircle {
                    raw,
                    full_circle: scale.full_circle().raw(),
                });
            }
            if count == 0 {
                return Err(FixError::ZeroCount { raw });
            }
            *counts.entry(angle).or_insert(0) += count;
        }
        Ok(SampleMap { scale, counts })
    }

    pub fn scale(&self) -> AngleScale {
        self.scale
    }

    /// Number of distinct bearings.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn observations(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    pub fn get(&self, angle: FixedAngle) -> Option<u32> {
        self.counts.get(&angle).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FixedAngle, u32)> + '_ {
        self.counts.iter().map(|(&a, &c)| (a, c))
    }

    /// Entries seen at least `min_count` times.
    pub fn at_least(&self, min_count: u32) -> impl Iterator<Item = (FixedAngle, u32)> + '_ {
        self.iter().filter(move |&(_, c)| c >= min_count)
    }
}
