//! Risk Tiers

use serde::{Deserialize, Serialize};

/// Discrete risk tier, a pure function of the clamped score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Map a clamped score to its tier. Thresholds are fixed and evaluated
    /// high to low; there is no hysteresis between evaluations.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            RiskTier::High
        } else if score >= 50.0 {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "LOW",
            RiskTier::Medium => "MEDIUM",
            RiskTier::High => "HIGH",
        }
    }

    /// Fixed operator advisory for this tier
    pub fn recommendation(&self) -> &'static str {
        match self {
            RiskTier::High => {
                "🚨 Auto-scale services, restart impacted nodes, \
                 enable rate limiting, and trigger incident workflow."
            }
            RiskTier::Medium => {
                "⚠️ Monitor closely, scale resources gradually, \
                 clear queue backlogs, optimize services."
            }
            RiskTier::Low => "✅ System stable. Continue monitoring.",
        }
    }
}
