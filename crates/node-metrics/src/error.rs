//! Metrics Validation Error Types

use thiserror::Error;

/// Errors raised while validating a metrics reading
#[derive(Debug, Clone, Error)]
pub enum MetricsError {
    /// Value is NaN or infinite
    #[error("{field} value {value} is not a finite number")]
    NotFinite { field: &'static str, value: f64 },

    /// Value is below zero
    #[error("{field} value {value} is negative; all readings must be >= 0")]
    Negative { field: &'static str, value: f64 },

    /// Missing required field
    #[error("missing required metric: {0}")]
    MissingField(&'static str),
}
