use std::{
    fs::File,
    io::{self, prelude::*},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use bearing_fixes::{Config, ReportFormat, Reporter, SampleMap};

/// Reduce bearing measurements to display fixes.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// TOML run configuration; built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON sample mapping to reduce instead of drawing synthetic samples
    #[arg(short, long)]
    samples: Option<PathBuf>,

    /// Output format, overrides the configuration
    #[arg(short, long, value_enum)]
    format: Option<ReportFormat>,

    /// Seed for the synthetic source, overrides the configuration
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(format) = args.format {
        config.report.format = format;
    }
    if args.seed.is_some() {
        config.source.seed = args.seed;
    }

    let pipeline = config.pipeline()?;
    let mut anomalies = Vec::new();
    let samples = match &args.samples {
        Some(path) => {
            let mut samples_file = File::open(path)
                .with_context(|| format!("failed to open samples {}", path.display()))?;
            let mut samples_str = String::new();
            samples_file.read_to_string(&mut samples_str)?;
            let samples: SampleMap = serde_json::from_str(&samples_str)
                .with_context(|| format!("failed to parse samples {}", path.display()))?;
            info!("loaded {} bearings from {}", samples.len(), path.display());
            samples
        }
        None => {
            let drawn = config.source.generate(config.scale)?;
            anomalies.extend(drawn.anomaly);
            drawn.samples
        }
    };

    let mut report = pipeline
        .run(&config.geometry, samples)
        .context("fix reduction failed")?;
    anomalies.append(&mut report.anomalies);
    report.anomalies = anomalies;
    if !report.anomalies.is_empty() {
        warn!("run finished with {} warning(s)", report.anomalies.len());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    Reporter::new(config.report.clone()).write(&report, &mut out)?;
    Ok(())
}
