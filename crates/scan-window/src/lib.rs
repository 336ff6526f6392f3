//! Scan Window
//!
//! Provides a bounded FIFO of lidar scans, oldest first, used as the
//! history buffer of temporal scan filters.

mod buffer;

pub use buffer::{ScanWindow, DEFAULT_DEPTH};

/// One lidar scan: range readings indexed by channel
pub type Scan = Vec<f64>;
