//! Precision → bins → fixes, end to end.

use derivative::Derivative;
use log::info;
use measurements::Length;
use serde::{Deserialize, Serialize};

use crate::angle::{AngleScale, FixedAngle};
use crate::binner::{Binner, Bins};
use crate::consts::{DEFAULT_RANGE_M, DEFAULT_TOLERANCE_M};
use crate::error::{Anomaly, FixResult};
use crate::precision::estimate_precision;
use crate::reducer::{Fixes, Reducer, ReducerConfig};
use crate::samples::SampleMap;

/// Observation geometry, metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Geometry {
    #[derivative(Default(value = "DEFAULT_RANGE_M"))]
    pub range_m: f64,
    #[derivative(Default(value = "DEFAULT_TOLERANCE_M"))]
    pub tolerance_m: f64,
}

impl Geometry {
    pub fn range(&self) -> Length {
        Length::from_meters(self.range_m)
    }

    pub fn tolerance(&self) -> Length {
        Length::from_meters(self.tolerance_m)
    }
}

/// Every artifact of one run.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub scale: AngleScale,
    pub precision: FixedAngle,
    pub step: FixedAngle,
    pub samples: SampleMap,
    pub bins: Bins,
    pub fixes: Fixes,
    pub anomalies: Vec<Anomaly>,
}

#[derive(Debug, Clone, Copy)]
pub struct FixPipeline {
    scale: AngleScale,
    reducer: Reducer,
}

impl FixPipeline {
    pub fn new(scale: AngleScale, reducer: ReducerConfig) -> FixResult<Self> {
        Ok(FixPipeline {
            scale,
            reducer: Reducer::new(reducer)?,
        })
    }

    pub fn scale(&self) -> AngleScale {
        self.scale
    }

    /// Precision and step failures abort before any sample is touched; lost
    /// samples are recorded in the report and the run continues.
    pub fn run(&self, geometry: &Geometry, samples: SampleMap) -> FixResult<PipelineReport> {
        let precision = estimate_precision(geometry.range(), geometry.tolerance(), self.scale)?;
        let binner = Binner::new(precision, self.scale)?;
        let binning = binner.assign(&samples)?;
        let fixes = self.reducer.reduce(&binning.bins, precision, self.scale);

        info!(
            "{} bearings -> {} bins -> {} fixes",
            samples.len(),
            binning.bins.len(),
            fixes.len()
        );
        Ok(PipelineReport {
            scale: self.scale,
            precision,
            step: binner.step(),
            samples,
            bins: binning.bins,
            fixes,
            anomalies: binning.lost.into_iter().collect(),
        })
    }
}
