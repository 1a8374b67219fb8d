use std::{
    fs::File,
    io::{self, prelude::*},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use bearing_fixes::Config;

/// Draw a synthetic sample mapping and write it as JSON.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// TOML run configuration; its [source] section and scale are used
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Destination file; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

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
    if args.seed.is_some() {
        config.source.seed = args.seed;
    }

    let drawn = config.source.generate(config.scale)?;

    let json = serde_json::to_string_pretty(&drawn.samples)?;
    match &args.output {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            writeln!(file, "{}", json)?;
            info!("wrote {} bearings to {}", drawn.samples.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            writeln!(stdout.lock(), "{}", json)?;
        }
    }
    Ok(())
}
