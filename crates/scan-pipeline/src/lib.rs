//! Lidar Scan Pipeline
//!
//! Generates synthetic lidar scans, runs them through the configured
//! [`FilterChain`] and writes one JSON record per scan.

mod error;
mod settings;

pub use error::PipelineError;
pub use settings::{load_settings, PipelineSettings, ENV_PREFIX};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scan_filters::FilterChain;
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// One raw scan and its filtered counterpart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanRecord {
    pub index: usize,
    pub raw: Vec<f64>,
    pub filtered: Vec<f64>,
}

/// Initialize logging to stderr; `RUST_LOG` overrides the INFO default
pub fn init_logging() -> Result<(), PipelineError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Random scan with readings uniform in `[data_min, data_min + data_spread)`
pub fn generate_scan<R: Rng>(rng: &mut R, settings: &PipelineSettings) -> Vec<f64> {
    (0..settings.channels)
        .map(|_| settings.data_min + rng.random::<f64>() * settings.data_spread)
        .collect()
}

/// Filter `settings.scans` synthetic scans, returning every record
pub fn process_scans(settings: &PipelineSettings) -> Result<Vec<ScanRecord>, PipelineError> {
    let mut chain = FilterChain::from_config(&settings.filters)?;
    info!(
        "Running {} scans x {} channels through {:?}",
        settings.scans,
        settings.channels,
        chain.names()
    );

    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut records = Vec::with_capacity(settings.scans);
    for index in 0..settings.scans {
        let raw = generate_scan(&mut rng, settings);
        let filtered = chain.process(&raw)?;
        debug!("Scan {} filtered", index);
        records.push(ScanRecord {
            index,
            raw,
            filtered,
        });
    }
    Ok(records)
}

/// Run the pipeline and write JSON lines to `out`
pub fn run<W: Write>(settings: &PipelineSettings, out: &mut W) -> Result<(), PipelineError> {
    let records = process_scans(settings)?;
    for record in &records {
        serde_json::to_writer(&mut *out, record)?;
        writeln!(out)?;
    }
    out.flush()?;

    info!("Wrote {} filtered scans", records.len());
    Ok(())
}
