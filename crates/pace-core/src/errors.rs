//! Cross-cutting error types for Pace.
//!
//! Engine-specific errors (`ForecastError`) live in `pace-forecast` and config
//! errors in `pace-config`. The CLI converges all of them through `anyhow`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can be raised by any Pace crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A priority value could not be normalized to `P1`, `P2`, or `P3`.
    #[error("Invalid priority tier: {0}")]
    InvalidPriority(String),

    /// A snapshot file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A snapshot document could not be parsed.
    #[error("Failed to parse snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}
