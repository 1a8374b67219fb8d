//! Synthetic bearing source: normally distributed measurements around a peak.

use derivative::Derivative;
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::angle::AngleScale;
use crate::consts::{DEFAULT_MEAN_DEG, DEFAULT_SAMPLE_COUNT, DEFAULT_STD_DEV_DEG};
use crate::error::{Anomaly, FixError, FixResult};
use crate::samples::SampleMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct SyntheticSource {
    /// Measurements to draw.
    #[derivative(Default(value = "DEFAULT_SAMPLE_COUNT"))]
    pub samples: usize,
    /// Peak bearing, degrees in `[0, 360)`.
    #[derivative(Default(value = "DEFAULT_MEAN_DEG"))]
    pub mean_deg: f64,
    #[derivative(Default(value = "DEFAULT_STD_DEV_DEG"))]
    pub std_dev_deg: f64,
    /// Fixed seed for reproducible draws; entropy-seeded when absent.
    pub seed: Option<u64>,
}

/// Output of one draw.
#[derive(Debug, Clone)]
pub struct Synthesized {
    pub samples: SampleMap,
    pub anomaly: Option<Anomaly>,
}

impl SyntheticSource {
    /// Draws `samples` bearings and accumulates them into a fresh mapping.
    ///
    /// A mean outside `[0, 360)` is not an error: the mapping comes back
    /// empty with [`Anomaly::MeanOutOfRange`] attached.
    pub fn generate(&self, scale: AngleScale) -> FixResult<Synthesized> {
        if !(0.0..360.0).contains(&self.mean_deg) {
            let anomaly = Anomaly::MeanOutOfRange {
                mean_deg: self.mean_deg,
            };
            warn!("{}", anomaly);
            return Ok(Synthesized {
                samples: SampleMap::empty(scale),
                anomaly: Some(anomaly),
            });
        }

        if !(self.std_dev_deg >= 0.0) {
            return Err(FixError::InvalidConfig(format!(
                "std_dev_deg must be non-negative, got {}",
                self.std_dev_deg
            )));
        }
        let normal = Normal::new(self.mean_deg, self.std_dev_deg)?;
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let samples = SampleMap::from_degrees(normal.sample_iter(&mut rng).take(self.samples), scale);
        debug!(
            "drew {} samples around {}°, {} distinct bearings",
            self.samples,
            self.mean_deg,
            samples.len()
        );
        Ok(Synthesized {
            samples,
            anomaly: None,
        })
    }
}
