//! Learned Failure-Probability Estimator
//!
//! Wraps an externally trained classifier artifact (exported to ONNX) behind
//! a small estimate-only capability. The artifact is opaque: this crate never
//! inspects its structure, only the positive-class probability it emits.

mod estimator;

pub use estimator::LearnedEstimator;

use thiserror::Error;

/// Errors from artifact loading or inference
#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("model load failed: {0}")]
    Load(String),
    #[error("inference failed: {0}")]
    Inference(String),
    #[error("model returned no probability output")]
    EmptyOutput,
}
