//! Pipeline Error Types

use scan_filters::FilterError;
use thiserror::Error;

/// Errors that can occur while running the demo pipeline
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Settings could not be loaded or deserialized
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A filter stage rejected a scan
    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    /// Output record could not be encoded
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// Output could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A global tracing subscriber is already installed
    #[error("Logging setup failed: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),
}
