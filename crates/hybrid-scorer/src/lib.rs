//! Hybrid Risk Scorer
//!
//! Combines the deterministic rule engine with the learned estimator into a
//! single clamped risk score, then maps the score to a tier and a fixed
//! operator recommendation.

mod scorer;
mod tier;

pub use scorer::{crisis_bonus, Assessment, HybridScorer};
pub use tier::RiskTier;
