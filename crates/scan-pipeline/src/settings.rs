//! Pipeline settings loaded from defaults, an optional file and the environment

use crate::error::PipelineError;
use config::{Config, Environment, File};
use scan_filters::{FilterConfig, MedianConfig, RangeConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Environment variable prefix, e.g. `SCAN_PIPELINE_FILTERS__MEDIAN__DEPTH=5`
pub const ENV_PREFIX: &str = "SCAN_PIPELINE";

/// Demo pipeline settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineSettings {
    /// Filter stages to run
    pub filters: FilterConfig,

    /// Channels per synthetic scan
    pub channels: usize,

    /// Number of synthetic scans to generate
    pub scans: usize,

    /// Smallest generated range reading
    pub data_min: f64,

    /// Width of the uniform range distribution
    pub data_spread: f64,

    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            filters: FilterConfig {
                range: Some(RangeConfig {
                    range_min: 5.0,
                    range_max: 20.0,
                }),
                median: Some(MedianConfig { depth: 3 }),
            },
            channels: 5,
            scans: 6,
            data_min: 0.03,
            data_spread: 49.97,
            seed: None,
        }
    }
}

/// Load settings: defaults, then `path` if given, then `SCAN_PIPELINE_*` variables
pub fn load_settings(path: Option<&Path>) -> Result<PipelineSettings, PipelineError> {
    load_settings_with_prefix(path, ENV_PREFIX)
}

pub(crate) fn load_settings_with_prefix(
    path: Option<&Path>,
    prefix: &str,
) -> Result<PipelineSettings, PipelineError> {
    let mut builder = Config::builder().add_source(Config::try_from(&PipelineSettings::default())?);

    if let Some(path) = path {
        info!("Loading settings from {}", path.display());
        builder = builder.add_source(File::from(path));
    }

    let settings: PipelineSettings = builder
        .add_source(
            Environment::with_prefix(prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_sources() {
        let settings = load_settings_with_prefix(None, "SCAN_PIPELINE_TEST_NONE").unwrap();
        assert_eq!(settings, PipelineSettings::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
scans = 10
seed = 42

[filters.median]
depth = 1
"#
        )
        .unwrap();

        let settings =
            load_settings_with_prefix(Some(file.path()), "SCAN_PIPELINE_TEST_FILE").unwrap();
        assert_eq!(settings.scans, 10);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.filters.median, Some(MedianConfig { depth: 1 }));
        assert_eq!(settings.filters.range.map(|r| r.range_max), Some(20.0));
        assert_eq!(settings.channels, 5);
    }

    #[test]
    fn test_environment_overrides_defaults() {
        std::env::set_var("SCAN_PIPELINE_TEST_ENV_CHANNELS", "8");
        std::env::set_var("SCAN_PIPELINE_TEST_ENV_FILTERS__MEDIAN__DEPTH", "0");

        let settings = load_settings_with_prefix(None, "SCAN_PIPELINE_TEST_ENV").unwrap();
        assert_eq!(settings.channels, 8);
        assert_eq!(settings.filters.median, Some(MedianConfig { depth: 0 }));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_settings_with_prefix(
            Some(Path::new("/nonexistent/scan-pipeline.toml")),
            "SCAN_PIPELINE_TEST_MISSING",
        );
        assert!(matches!(result, Err(PipelineError::Config(_))));
    }
}
