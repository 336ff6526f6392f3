//! Lidar Scan Filters
//!
//! Provides signal conditioning for fixed-length lidar scans: amplitude
//! clamping with [`RangeFilter`] and per-channel temporal smoothing with
//! [`TemporalMedianFilter`]. Both implement [`ScanFilter`] and can be run
//! in sequence through a [`FilterChain`].
//!
//! ```text
//! raw scan → RangeFilter → TemporalMedianFilter → filtered scan
//! ```

mod chain;
mod config;
mod error;
mod median;
mod range;

pub use chain::{FilterChain, ScanFilter};
pub use config::{FilterConfig, MedianConfig, RangeConfig};
pub use error::FilterError;
pub use median::{median, TemporalMedianFilter};
pub use range::RangeFilter;
pub use scan_window::Scan;
