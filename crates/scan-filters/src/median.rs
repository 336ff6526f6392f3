//! Temporal Median Filter for Scan Noise Reduction

use crate::config::MedianConfig;
use crate::error::FilterError;
use scan_window::ScanWindow;
use tracing::{debug, warn};

/// Sliding window median filter over successive scans.
///
/// Keeps the current scan plus up to `depth` prior scans and emits, for each
/// channel, the median of that channel across the window:
///
/// ```text
/// y_i(t) = median(x_i(t), x_i(t-1), ..., x_i(t-depth))
/// ```
///
/// Until `depth + 1` scans have been seen the median covers every scan so
/// far, so the first output always equals the first input.
#[derive(Debug, Clone)]
pub struct TemporalMedianFilter {
    history: ScanWindow,
}

impl TemporalMedianFilter {
    /// Create a filter over the current scan and `depth` prior scans
    pub fn new(depth: usize) -> Self {
        debug!("Creating temporal median filter with depth {}", depth);
        Self {
            history: ScanWindow::with_depth(depth),
        }
    }

    /// Create a filter from config
    pub fn from_config(config: &MedianConfig) -> Self {
        Self::new(config.depth)
    }

    /// Number of prior scans included in the median
    pub fn depth(&self) -> usize {
        self.history.depth()
    }

    /// Number of scans currently in the window
    pub fn window_len(&self) -> usize {
        self.history.len()
    }

    /// Whether the window holds `depth + 1` scans
    pub fn is_warm(&self) -> bool {
        self.history.is_full()
    }

    /// Total scans fed through the filter since creation
    pub fn scans_seen(&self) -> usize {
        self.history.total_pushed()
    }

    /// Add a scan and get the per-channel median of the window.
    ///
    /// Fails with [`FilterError::ChannelMismatch`] if the scan's channel count
    /// differs from the scans that stay in the window; the window is left
    /// unchanged in that case.
    pub fn update(&mut self, scan: &[f64]) -> Result<Vec<f64>, FilterError> {
        let actual = scan.len();
        if let Some(expected) = self
            .history
            .survivors()
            .map(Vec::len)
            .find(|&len| len != actual)
        {
            warn!(
                "Rejecting scan: {} channels, window holds {}-channel scans",
                actual, expected
            );
            return Err(FilterError::ChannelMismatch { expected, actual });
        }

        self.history.push(scan.to_vec());

        let mut filtered = Vec::with_capacity(actual);
        for channel in 0..actual {
            let mut values = self
                .history
                .column(channel)
                .ok_or_else(|| FilterError::ChannelMismatch {
                    expected: self.history.channel_count(),
                    actual,
                })?;
            filtered.push(median_of_nonempty(&mut values));
        }

        Ok(filtered)
    }

    /// Reset the filter to its freshly constructed state, including `scans_seen`
    pub fn reset(&mut self) {
        self.history = ScanWindow::with_depth(self.depth());
    }
}

impl Default for TemporalMedianFilter {
    fn default() -> Self {
        Self::from_config(&MedianConfig::default())
    }
}

/// Median of a set of values, sorting them in place.
///
/// Odd counts give the middle element, even counts the mean of the two
/// central elements. Any NaN makes the median NaN, regardless of its sign
/// bit. Returns `None` for an empty slice.
pub fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(median_of_nonempty(values))
}

fn median_of_nonempty(values: &mut [f64]) -> f64 {
    if values.iter().any(|v| v.is_nan()) {
        return f64::NAN;
    }
    values.sort_unstable_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        values[mid]
    } else {
        0.5 * (values[mid - 1] + values[mid])
    }
}
