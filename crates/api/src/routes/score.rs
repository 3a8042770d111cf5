//! Scoring Route

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{ApiError, AppState};
use history_ledger::ScoringEvent;
use hybrid_scorer::RiskTier;
use node_metrics::MetricsVector;

/// Scoring request body. All six fields are required; a missing or
/// non-numeric field is rejected before any scoring happens.
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub cpu: f64,
    pub memory: f64,
    pub disk_io: f64,
    pub net_latency: f64,
    pub error_rate: f64,
    pub queue_length: f64,
}

/// Scoring response
#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub risk_score: f64,
    pub tier: RiskTier,
    pub recommendation: &'static str,
    /// Ledger contents after this event was appended, oldest first
    pub history: Vec<ScoringEvent>,
}

/// Score one metrics reading. The ledger is only touched once the input
/// has validated and the score is computed.
pub async fn post_score(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, ApiError> {
    let metrics = MetricsVector::new(
        request.cpu,
        request.memory,
        request.disk_io,
        request.net_latency,
        request.error_rate,
        request.queue_length,
    )?;

    let assessment = state.scorer.score(&metrics);
    state
        .ledger
        .append(ScoringEvent::capture(assessment.risk_score, assessment.tier, &metrics));

    Ok(Json(ScoreResponse {
        risk_score: assessment.risk_score,
        tier: assessment.tier,
        recommendation: assessment.recommendation,
        history: state.ledger.recent(),
    }))
}
