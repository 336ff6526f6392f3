//! Lidar Scan Pipeline - Main Entry Point

use clap::Parser;
use scan_pipeline::{init_logging, load_settings, run};
use std::path::PathBuf;
use tracing::info;

/// Run synthetic lidar scans through the configured filter chain
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Settings file (TOML, YAML, JSON, ...)
    config: Option<PathBuf>,

    /// Override the RNG seed
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging()?;

    info!("=== Lidar Scan Pipeline v{} ===", env!("CARGO_PKG_VERSION"));

    let mut settings = load_settings(args.config.as_deref())?;
    if args.seed.is_some() {
        settings.seed = args.seed;
    }

    let stdout = std::io::stdout();
    run(&settings, &mut stdout.lock())?;

    Ok(())
}
