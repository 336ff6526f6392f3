//! Filter configuration

use serde::{Deserialize, Serialize};

/// Range clamp configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeConfig {
    /// Values below this are raised to it (meters)
    pub range_min: f64,

    /// Values above this are lowered to it (meters)
    pub range_max: f64,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            range_min: 0.03,
            range_max: 50.0,
        }
    }
}

/// Temporal median configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedianConfig {
    /// Prior scans included in the median, in addition to the current one
    pub depth: usize,
}

impl Default for MedianConfig {
    fn default() -> Self {
        Self {
            depth: scan_window::DEFAULT_DEPTH,
        }
    }
}

/// Filter chain configuration.
///
/// Stages run range first, then median. A missing section disables that stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub range: Option<RangeConfig>,

    #[serde(default)]
    pub median: Option<MedianConfig>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            range: Some(RangeConfig::default()),
            median: Some(MedianConfig::default()),
        }
    }
}

impl FilterConfig {
    /// Clamp only
    pub fn range_only(range_min: f64, range_max: f64) -> Self {
        Self {
            range: Some(RangeConfig {
                range_min,
                range_max,
            }),
            median: None,
        }
    }

    /// Temporal median only
    pub fn median_only(depth: usize) -> Self {
        Self {
            range: None,
            median: Some(MedianConfig { depth }),
        }
    }
}
