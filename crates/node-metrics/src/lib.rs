//! Node Metrics
//!
//! Provides the validated six-metric input vector consumed by the scoring engine.

mod error;
mod vector;

pub use error::MetricsError;
pub use vector::{MetricsVector, METRIC_COUNT};
