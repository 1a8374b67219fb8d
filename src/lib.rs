//! Reduction of noisy bearing measurements to a sparse set of display fixes.
//!
//! A run derives the angular precision needed at a given range, groups the
//! discretized bearings into bins whose width divides the circle evenly, and
//! thins each bin in proportion to its density.
//!
//! ```no_run
//! use bearing_fixes::{AngleScale, FixPipeline, Geometry, ReducerConfig, SyntheticSource};
//!
//! # fn main() -> Result<(), bearing_fixes::FixError> {
//! let scale = AngleScale::default();
//! let samples = SyntheticSource::default().generate(scale)?.samples;
//! let report = FixPipeline::new(scale, ReducerConfig::default())?
//!     .run(&Geometry::default(), samples)?;
//! for degrees in report.fixes.degrees() {
//!     println!("{degrees:.4}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod angle;
pub mod binner;
pub mod config;
pub mod consts;
pub mod error;
pub mod pipeline;
pub mod precision;
pub mod reducer;
pub mod report;
pub mod samples;
pub mod synthetic;

pub use crate::angle::{AngleScale, FixedAngle};
pub use crate::binner::{find_step, Binner, Binning, Bins};
pub use crate::config::Config;
pub use crate::error::{Anomaly, FixError, FixResult};
pub use crate::pipeline::{FixPipeline, Geometry, PipelineReport};
pub use crate::precision::estimate_precision;
pub use crate::reducer::{reduce_with_divisor, Fixes, Reducer, ReducerConfig};
pub use crate::report::{ReportConfig, ReportFormat, Reporter};
pub use crate::samples::SampleMap;
pub use crate::synthetic::{SyntheticSource, Synthesized};
