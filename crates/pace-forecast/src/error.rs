//! Forecasting error types.
//!
//! Only invalid input is an error. Zero throughput and missing items,
//! teams, or predecessors are normal forecasting states and surface as
//! `null` values or [`pace_core::responses::ForecastIssue`] flags instead.

use pace_core::errors::CoreError;
use thiserror::Error;

/// Errors from the forecasting engine.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Malformed input that points at a data-integrity bug upstream.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A count that must be non-negative was negative.
    #[error("Negative {field}: {value}")]
    NegativeCount { field: String, value: i64 },

    /// Objective dependencies or parent links form a cycle.
    #[error("Objective graph has a cycle through '{objective_id}'")]
    DependencyCycle { objective_id: String },

    /// Error from pace-core (lookups, parsing).
    #[error(transparent)]
    Core(#[from] CoreError),
}
