//! Text and JSON rendering of a pipeline run.

use std::io::Write;

use clap::ValueEnum;
use derivative::Derivative;
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_MIN_DISPLAY_COUNT;
use crate::error::FixResult;
use crate::pipeline::PipelineReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct ReportConfig {
    /// INITIAL rows with fewer observations are hidden.
    #[derivative(Default(value = "DEFAULT_MIN_DISPLAY_COUNT"))]
    pub min_display_count: u32,
    pub format: ReportFormat,
}

#[derive(Debug, Clone)]
pub struct Reporter {
    config: ReportConfig,
}

impl Reporter {
    pub fn new(config: ReportConfig) -> Self {
        Reporter { config }
    }

    pub fn write<W: Write>(&self, report: &PipelineReport, out: &mut W) -> FixResult<()> {
        match self.config.format {
            ReportFormat::Table => self.write_table(report, out),
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, report)?;
                writeln!(out)?;
                Ok(())
            }
        }
    }

    pub fn write_table<W: Write>(&self, report: &PipelineReport, out: &mut W) -> FixResult<()> {
        let scale = report.scale;
        let digits = scale.decimal_digits();

        writeln!(
            out,
            "Target precision: {:.*}° (bin width {:.*}°)",
            digits,
            scale.degrees(report.precision),
            digits,
            scale.degrees(report.step)
        )?;
        writeln!(out)?;

        writeln!(out, "INITIAL ({}) ==>", report.samples.len())?;
        writeln!(
            out,
            "Distribution for {} samples:",
            report.samples.observations()
        )?;
        for (row, (angle, count)) in report
            .samples
            .at_least(self.config.min_display_count)
            .enumerate()
        {
            writeln!(
                out,
                "{:>11}: {:>14.*} : {}",
                row + 1,
                digits,
                scale.degrees(angle),
                count
            )?;
        }
        writeln!(out)?;

        writeln!(out, "SPLIT ({}) ==>", report.bins.len())?;
        for (row, (boundary, members)) in report.bins.iter().enumerate() {
            writeln!(
                out,
                "{:>11}: {:>14.*} : {}",
                row + 1,
                digits,
                scale.degrees(boundary),
                members.len()
            )?;
        }
        writeln!(out)?;

        writeln!(out, "RESULT ({}) ==>", report.fixes.len())?;
        for (row, (degrees, delta)) in report.fixes.with_deltas().enumerate() {
            writeln!(
                out,
                "{:>11}: {:>14.*} {:.*}",
                row + 1,
                digits,
                degrees,
                digits,
                delta
            )?;
        }
        writeln!(out)?;

        for anomaly in &report.anomalies {
            writeln!(out, "warning: {}", anomaly)?;
        }
        Ok(())
    }
}
