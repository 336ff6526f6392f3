//! Scan Filter Trait and Sequential Filter Chain

use crate::config::FilterConfig;
use crate::error::FilterError;
use crate::median::TemporalMedianFilter;
use crate::range::RangeFilter;
use tracing::debug;

/// Common interface for scan filters.
///
/// Filters map a scan to a scan of the same length. Stateful filters carry
/// history between calls, so call order matters.
pub trait ScanFilter: Send {
    /// Apply the filter to a scan, returning a filtered scan
    fn apply(&mut self, scan: &[f64]) -> Result<Vec<f64>, FilterError>;

    /// Get the name of this filter for diagnostics
    fn name(&self) -> &'static str;

    /// Drop any carried state
    fn reset(&mut self) {}
}

impl ScanFilter for RangeFilter {
    fn apply(&mut self, scan: &[f64]) -> Result<Vec<f64>, FilterError> {
        Ok(self.update(scan))
    }

    fn name(&self) -> &'static str {
        "range"
    }
}

impl ScanFilter for TemporalMedianFilter {
    fn apply(&mut self, scan: &[f64]) -> Result<Vec<f64>, FilterError> {
        self.update(scan)
    }

    fn name(&self) -> &'static str {
        "temporal_median"
    }

    fn reset(&mut self) {
        TemporalMedianFilter::reset(self);
    }
}

/// Ordered sequence of filters applied to each scan
#[derive(Default)]
pub struct FilterChain {
    stages: Vec<Box<dyn ScanFilter>>,
}

impl FilterChain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the chain described by config: range stage, then median stage
    pub fn from_config(config: &FilterConfig) -> Result<Self, FilterError> {
        let mut chain = Self::new();
        if let Some(range) = &config.range {
            chain.push(RangeFilter::from_config(range)?);
        }
        if let Some(median) = &config.median {
            chain.push(TemporalMedianFilter::from_config(median));
        }
        Ok(chain)
    }

    /// Append a stage (builder form)
    pub fn with_filter(mut self, filter: impl ScanFilter + 'static) -> Self {
        self.push(filter);
        self
    }

    /// Append a stage
    pub fn push(&mut self, filter: impl ScanFilter + 'static) {
        debug!("Adding '{}' stage to filter chain", filter.name());
        self.stages.push(Box::new(filter));
    }

    /// Number of stages
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Check if the chain has no stages
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Stage names in execution order
    pub fn names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Run a scan through every stage in order, stopping at the first error
    pub fn process(&mut self, scan: &[f64]) -> Result<Vec<f64>, FilterError> {
        let mut current = scan.to_vec();
        for stage in &mut self.stages {
            current = stage.apply(&current)?;
            debug!("Stage '{}' produced {} channels", stage.name(), current.len());
        }
        Ok(current)
    }

    /// Reset every stage
    pub fn reset(&mut self) {
        for stage in &mut self.stages {
            stage.reset();
        }
    }
}

impl std::fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterChain")
            .field("stages", &self.names())
            .finish()
    }
}
