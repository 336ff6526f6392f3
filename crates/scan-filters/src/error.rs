//! Filter Error Types

use thiserror::Error;

/// Errors raised by scan filters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// Scan channel count differs from the scans retained in the window
    #[error("Channel count mismatch: window holds {expected}-channel scans, got {actual}")]
    ChannelMismatch { expected: usize, actual: usize },

    /// Range bounds are NaN or inverted
    #[error("Invalid range bounds [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },
}
