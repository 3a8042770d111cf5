//! Threshold Rules

use node_metrics::MetricsVector;
use tracing::debug;

/// Maximum rule-based contribution
pub const RULE_CEILING: f64 = 100.0;

/// Score a metrics vector with independent, additive per-metric brackets.
///
/// Each metric has a mid and a high breakpoint; the high bracket takes
/// precedence and only one bracket per metric applies. Contributions never
/// decrease as a metric worsens, and the sum is capped at [`RULE_CEILING`].
pub fn score_rules(metrics: &MetricsVector) -> f64 {
    let mut score = 0.0;

    score += bracket(metrics.cpu_pct, 85.0, 20.0, 70.0, 10.0);
    score += bracket(metrics.mem_pct, 85.0, 20.0, 70.0, 10.0);
    score += bracket(metrics.disk_io, 120.0, 15.0, 90.0, 10.0);
    score += bracket(metrics.latency_ms, 300.0, 20.0, 150.0, 10.0);
    score += bracket(metrics.error_rate_pct, 5.0, 25.0, 2.0, 15.0);
    score += bracket(metrics.queue_len, 100.0, 15.0, 50.0, 10.0);

    let capped = score.min(RULE_CEILING);
    debug!(raw = score, capped, "rule score computed");
    capped
}

/// One two-breakpoint bracket: high wins over mid, below mid contributes 0.
fn bracket(value: f64, high: f64, high_pts: f64, mid: f64, mid_pts: f64) -> f64 {
    if value > high {
        high_pts
    } else if value > mid {
        mid_pts
    } else {
        0.0
    }
}
