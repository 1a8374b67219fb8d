//! TOML run configuration.

use std::{fs::File, io::prelude::*, path::Path};

use serde::Deserialize;

use crate::angle::AngleScale;
use crate::error::FixResult;
use crate::pipeline::{FixPipeline, Geometry};
use crate::reducer::ReducerConfig;
use crate::report::ReportConfig;
use crate::synthetic::SyntheticSource;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scale: AngleScale,
    pub geometry: Geometry,
    pub source: SyntheticSource,
    pub reduction: ReducerConfig,
    pub report: ReportConfig,
}

impl Config {
    pub fn from_path(path: impl AsRef<Path>) -> FixResult<Self> {
        let mut config_file = File::open(path)?;
        let mut config_str = String::new();
        config_file.read_to_string(&mut config_str)?;
        Self::from_toml(&config_str)
    }

    pub fn from_toml(text: &str) -> FixResult<Self> {
        let config: Config = toml::from_str(text)?;
        config.reduction.validate()?;
        Ok(config)
    }

    pub fn pipeline(&self) -> FixResult<FixPipeline> {
        FixPipeline::new(self.scale, self.reduction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{DEFAULT_MIN_DISPLAY_COUNT, SCALE};
    use crate::error::FixError;
    use crate::report::ReportFormat;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.scale.get(), SCALE);
        assert_eq!(config.geometry, Geometry::default());
        assert_eq!(config.source, SyntheticSource::default());
        assert_eq!(config.reduction, ReducerConfig::default());
        assert_eq!(config.report.min_display_count, DEFAULT_MIN_DISPLAY_COUNT);
        assert_eq!(config.report.format, ReportFormat::Table);
    }

    #[test]
    fn sections_override_defaults() {
        let config = Config::from_toml(
            r#"
            scale = 1000

            [geometry]
            range_m = 1000.0

            [source]
            mean_deg = 270.0
            seed = 9

            [reduction]
            density_divisor = 12.5

            [report]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.scale.get(), 1000);
        assert_eq!(config.geometry.range_m, 1000.0);
        assert_eq!(config.geometry.tolerance_m, 50.0);
        assert_eq!(config.source.mean_deg, 270.0);
        assert_eq!(config.source.seed, Some(9));
        assert_eq!(config.reduction.density_divisor, 12.5);
        assert_eq!(config.report.format, ReportFormat::Json);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(Config::from_toml("scale = 0"), Err(FixError::Toml(_))));
        assert!(matches!(
            Config::from_toml("[reduction]\ndensity_divisor = -1.0"),
            Err(FixError::InvalidConfig(_))
        ));
    }

    #[test]
    fn oversized_or_uneven_scale_is_rejected() {
        assert!(matches!(
            Config::from_toml("scale = 100000000000000000"),
            Err(FixError::Toml(_))
        ));
        assert!(matches!(
            Config::from_toml("scale = 999999999999937"),
            Err(FixError::Toml(_))
        ));
        assert!(matches!(Config::from_toml("scale = 360"), Err(FixError::Toml(_))));
        assert_eq!(Config::from_toml("scale = 1000000").unwrap().scale.get(), 1_000_000);
    }
}
