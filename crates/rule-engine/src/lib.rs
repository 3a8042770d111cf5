//! Rule-Based Risk Scoring
//!
//! Deterministic threshold heuristics that score a metrics vector without
//! any trained model. Also serves as the fallback signal when ML inference
//! is unavailable.

mod rules;

pub use rules::{score_rules, RULE_CEILING};
