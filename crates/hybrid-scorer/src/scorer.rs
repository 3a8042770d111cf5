//! Hybrid Scorer Implementation

use crate::tier::RiskTier;
use learned_estimator::LearnedEstimator;
use node_metrics::MetricsVector;
use rule_engine::score_rules;
use serde::Serialize;
use tracing::{debug, warn};

/// Result of scoring one metrics vector
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    /// Risk score, clamped to [0, 100] and rounded to 2 decimals
    pub risk_score: f64,
    /// Tier derived from the score
    pub tier: RiskTier,
    /// Fixed tier-keyed advisory
    pub recommendation: &'static str,
}

/// Combines the rule engine and the learned estimator.
///
/// The two signals are treated as independent risk estimators and the more
/// alarming one wins the base score; crisis bonuses are then added on top.
/// The bonuses intentionally re-count some rule thresholds so that the
/// hybrid layer never under-reacts relative to the rule engine alone.
pub struct HybridScorer {
    estimator: LearnedEstimator,
}

impl HybridScorer {
    /// Create a scorer around an estimator (loaded or absent)
    pub fn new(estimator: LearnedEstimator) -> Self {
        Self { estimator }
    }

    /// Whether the learned estimator has a trained artifact
    pub fn estimator_loaded(&self) -> bool {
        self.estimator.is_loaded()
    }

    /// Score one metrics vector.
    ///
    /// Pure except for the read of the estimator's read-only state. An
    /// estimator inference failure is recoverable: the request falls back
    /// to the rule score alone.
    pub fn score(&self, metrics: &MetricsVector) -> Assessment {
        let rule_score = score_rules(metrics);
        let ml_score = match self.estimator.estimate(metrics) {
            Ok(probability) => probability,
            Err(err) => {
                warn!("estimator inference failed, falling back to rule score: {err}");
                0.0
            }
        };

        let base = rule_score.max(ml_score);
        let bonus = crisis_bonus(metrics);
        let risk_score = round2((base + bonus).clamp(0.0, 100.0));
        let tier = RiskTier::from_score(risk_score);

        debug!(
            rule_score,
            ml_score,
            bonus,
            risk_score,
            tier = tier.as_str(),
            "metrics scored"
        );

        Assessment {
            risk_score,
            tier,
            recommendation: tier.recommendation(),
        }
    }
}

/// Additive crisis bonuses, each independently triggered
pub fn crisis_bonus(metrics: &MetricsVector) -> f64 {
    let mut bonus = 0.0;

    if metrics.cpu_pct > 85.0 || metrics.mem_pct > 90.0 {
        bonus += 25.0;
    }
    if metrics.latency_ms > 300.0 || metrics.error_rate_pct > 5.0 {
        bonus += 20.0;
    }
    if metrics.queue_len > 100.0 {
        bonus += 15.0;
    }
    if metrics.disk_io > 140.0 {
        bonus += 10.0;
    }

    bonus
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn metrics(cpu: f64, mem: f64, disk: f64, lat: f64, err: f64, queue: f64) -> MetricsVector {
        MetricsVector::new(cpu, mem, disk, lat, err, queue).unwrap()
    }

    fn rule_only_scorer() -> HybridScorer {
        HybridScorer::new(LearnedEstimator::Absent)
    }

    #[test]
    fn test_healthy_node_is_low() {
        let a = rule_only_scorer().score(&metrics(30.0, 40.0, 20.0, 50.0, 0.5, 5.0));
        assert_eq!(a.risk_score, 0.0);
        assert_eq!(a.tier, RiskTier::Low);
    }

    #[test]
    fn test_cpu_memory_crisis_is_medium() {
        // rules: cpu>85 -> 20, mem>85 -> 20 = 40; crisis: cpu>85 or mem>90 -> +25
        let a = rule_only_scorer().score(&metrics(90.0, 95.0, 50.0, 100.0, 1.0, 10.0));
        assert_eq!(a.risk_score, 65.0);
        assert_eq!(a.tier, RiskTier::Medium);
    }

    #[test]
    fn test_full_blown_crisis_saturates_high() {
        // rules cap at 100, all four bonuses fire (+70), clamped back to 100
        let a = rule_only_scorer().score(&metrics(95.0, 96.0, 150.0, 400.0, 8.0, 150.0));
        assert_eq!(a.risk_score, 100.0);
        assert_eq!(a.tier, RiskTier::High);
    }

    #[test]
    fn test_degraded_mode_matches_rules_plus_bonuses() {
        // With no artifact loaded, the score is exactly rules + crisis bonuses
        let cases = [
            metrics(0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
            metrics(75.0, 75.0, 100.0, 200.0, 3.0, 60.0),
            metrics(90.0, 95.0, 50.0, 100.0, 1.0, 10.0),
            metrics(86.0, 0.0, 141.0, 301.0, 5.1, 101.0),
        ];
        let scorer = rule_only_scorer();
        for m in cases {
            let expected = (score_rules(&m) + crisis_bonus(&m)).clamp(0.0, 100.0);
            assert_eq!(scorer.score(&m).risk_score, expected);
        }
    }

    #[test]
    fn test_recommendation_follows_tier() {
        let scorer = rule_only_scorer();
        let low = scorer.score(&metrics(0.0, 0.0, 0.0, 0.0, 0.0, 0.0));
        assert_eq!(low.recommendation, RiskTier::Low.recommendation());

        let high = scorer.score(&metrics(95.0, 96.0, 150.0, 400.0, 8.0, 150.0));
        assert_eq!(high.recommendation, RiskTier::High.recommendation());
    }

    fn any_metrics() -> impl Strategy<Value = MetricsVector> {
        (
            0.0..500.0f64,
            0.0..500.0f64,
            0.0..500.0f64,
            0.0..2000.0f64,
            0.0..50.0f64,
            0.0..2000.0f64,
        )
            .prop_map(|(cpu, mem, disk, lat, err, queue)| {
                metrics(cpu, mem, disk, lat, err, queue)
            })
    }

    proptest! {
        #[test]
        fn prop_score_is_bounded(m in any_metrics()) {
            let a = rule_only_scorer().score(&m);
            prop_assert!((0.0..=100.0).contains(&a.risk_score));
        }

        #[test]
        fn prop_tier_is_consistent_with_score(m in any_metrics()) {
            let a = rule_only_scorer().score(&m);
            match a.tier {
                RiskTier::High => prop_assert!(a.risk_score >= 80.0),
                RiskTier::Medium => prop_assert!((50.0..80.0).contains(&a.risk_score)),
                RiskTier::Low => prop_assert!(a.risk_score < 50.0),
            }
        }

        #[test]
        fn prop_worsening_one_metric_never_lowers_score(
            m in any_metrics(),
            field in 0usize..6,
            bump in 0.0..500.0f64,
        ) {
            let scorer = rule_only_scorer();
            let before = scorer.score(&m).risk_score;

            let mut worse = m;
            match field {
                0 => worse.cpu_pct += bump,
                1 => worse.mem_pct += bump,
                2 => worse.disk_io += bump,
                3 => worse.latency_ms += bump,
                4 => worse.error_rate_pct += bump,
                _ => worse.queue_len += bump,
            }

            let after = scorer.score(&worse).risk_score;
            prop_assert!(after >= before);
        }
    }
}
