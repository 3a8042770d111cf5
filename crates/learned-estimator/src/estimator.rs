//! Estimator Implementation

use crate::EstimatorError;
use node_metrics::{MetricsVector, METRIC_COUNT};
use std::path::Path;
use tract_onnx::prelude::*;
use tracing::{debug, info, warn};

type OnnxPlan = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// Probability estimator backed by a pre-trained classifier.
///
/// `Absent` is a supported configuration, not an error: scoring degrades to
/// rule-only mode and the estimator contributes zero. The artifact is loaded
/// once at startup and is read-only for the life of the process.
pub enum LearnedEstimator {
    /// Trained artifact loaded and ready for inference
    Loaded(OnnxPlan),
    /// No artifact available
    Absent,
}

impl LearnedEstimator {
    /// Load the artifact at `path` if one exists.
    ///
    /// A missing file selects rule-only mode. A malformed file is logged and
    /// also degrades to rule-only rather than aborting startup.
    pub fn from_path(path: &Path) -> Self {
        if !path.exists() {
            info!(
                "no estimator artifact at {}; running in rule-only mode",
                path.display()
            );
            return Self::Absent;
        }

        match Self::load(path) {
            Ok(plan) => {
                info!("estimator artifact loaded from {}", path.display());
                Self::Loaded(plan)
            }
            Err(err) => {
                warn!(
                    "failed to load estimator artifact from {}: {err}; running in rule-only mode",
                    path.display()
                );
                Self::Absent
            }
        }
    }

    fn load(path: &Path) -> Result<OnnxPlan, EstimatorError> {
        tract_onnx::onnx()
            .model_for_path(path)
            .and_then(|model| model.with_input_fact(0, f32::fact([1, METRIC_COUNT]).into()))
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|err| EstimatorError::Load(err.to_string()))
    }

    /// Whether a trained artifact is loaded
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// Failure probability on a 0-100 scale, rounded to 2 decimals.
    ///
    /// `Absent` always yields 0. A per-request inference failure is returned
    /// as [`EstimatorError::Inference`]; the caller is expected to fall back
    /// to the rule score for that request.
    pub fn estimate(&self, metrics: &MetricsVector) -> Result<f64, EstimatorError> {
        let plan = match self {
            Self::Loaded(plan) => plan,
            Self::Absent => return Ok(0.0),
        };

        let features: Vec<f32> = metrics.as_array().iter().map(|&v| v as f32).collect();
        let input = tract_ndarray::Array2::from_shape_vec((1, METRIC_COUNT), features)
            .map_err(|err| EstimatorError::Inference(err.to_string()))?;

        let outputs = plan
            .run(tvec!(Tensor::from(input).into()))
            .map_err(|err| EstimatorError::Inference(err.to_string()))?;

        let probabilities = outputs[0]
            .to_array_view::<f32>()
            .map_err(|err| EstimatorError::Inference(err.to_string()))?;

        // Probability output has shape [1, 2]; the positive (failure) class
        // is the last column.
        let positive = probabilities
            .iter()
            .last()
            .copied()
            .ok_or(EstimatorError::EmptyOutput)? as f64;

        let pct = (positive * 100.0).clamp(0.0, 100.0);
        debug!(probability = positive, pct, "estimator inference completed");
        Ok((pct * 100.0).round() / 100.0)
    }
}
