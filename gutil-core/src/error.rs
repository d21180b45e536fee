//! Error types for gutil.
//!
//! Cache reads and writes never fail: a miss is `None`. Errors only surface
//! while building a cache, from configuration or from the sweeper's runtime
//! requirements.

use std::time::Duration;

use thiserror::Error;

/// Result type alias using `GutilError`.
pub type Result<T> = std::result::Result<T, GutilError>;

/// Error type for cache construction and configuration.
#[derive(Debug, Error)]
pub enum GutilError {
    // ═══════════════════════════════════════════════════════════════════════════
    // SWEEPER ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// The periodic sweep interval must be non-zero.
    #[error("Invalid sweep interval: {0:?} (must be greater than zero)")]
    InvalidSweepInterval(Duration),

    /// The background sweeper was requested outside a Tokio runtime.
    #[error("Periodic sweep requires a running Tokio runtime")]
    NoRuntime,

    // ═══════════════════════════════════════════════════════════════════════════
    // CONFIGURATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Malformed or incomplete configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl GutilError {
    /// Returns true if the error comes from user-supplied configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            GutilError::ConfigError(_)
                | GutilError::JsonError(_)
                | GutilError::InvalidSweepInterval(_)
        )
    }
}
