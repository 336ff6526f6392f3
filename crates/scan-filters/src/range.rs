//! Range Clamp Filter

use crate::config::RangeConfig;
use crate::error::FilterError;
use tracing::debug;

/// Clamps every channel of a scan into `[range_min, range_max]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeFilter {
    range_min: f64,
    range_max: f64,
}

impl RangeFilter {
    /// Create a range filter without checking the bounds.
    ///
    /// The caller guarantees `range_min <= range_max`. With inverted bounds
    /// every value ends up at one of the two bounds; which one is unspecified.
    pub fn new(range_min: f64, range_max: f64) -> Self {
        debug!("Creating range filter [{}, {}]", range_min, range_max);
        Self {
            range_min,
            range_max,
        }
    }

    /// Create a range filter, rejecting NaN or inverted bounds
    pub fn try_new(range_min: f64, range_max: f64) -> Result<Self, FilterError> {
        if range_min.is_nan() || range_max.is_nan() || range_min > range_max {
            return Err(FilterError::InvalidRange {
                min: range_min,
                max: range_max,
            });
        }
        Ok(Self::new(range_min, range_max))
    }

    /// Create a validated range filter from config
    pub fn from_config(config: &RangeConfig) -> Result<Self, FilterError> {
        Self::try_new(config.range_min, config.range_max)
    }

    /// Lower bound
    pub fn range_min(&self) -> f64 {
        self.range_min
    }

    /// Upper bound
    pub fn range_max(&self) -> f64 {
        self.range_max
    }

    /// Check if a value is left untouched by the filter
    pub fn contains(&self, value: f64) -> bool {
        !(value < self.range_min || value > self.range_max)
    }

    /// Clamp a scan, returning a new scan of the same length
    pub fn update(&self, scan: &[f64]) -> Vec<f64> {
        scan.iter().map(|&value| self.clamp(value)).collect()
    }

    // Lower bound wins; NaN fails both comparisons and passes through.
    #[inline]
    fn clamp(&self, value: f64) -> f64 {
        if value < self.range_min {
            self.range_min
        } else if value > self.range_max {
            self.range_max
        } else {
            value
        }
    }
}

impl Default for RangeFilter {
    fn default() -> Self {
        let config = RangeConfig::default();
        Self::new(config.range_min, config.range_max)
    }
}
