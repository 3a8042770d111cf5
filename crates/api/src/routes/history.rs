//! History Route

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::AppState;
use history_ledger::ScoringEvent;

/// Response for the history endpoint
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    /// Retained events, oldest first
    pub data: Vec<ScoringEvent>,
    pub count: usize,
}

/// Get recent scoring events
pub async fn get_history(State(state): State<Arc<AppState>>) -> Json<HistoryResponse> {
    let data = state.ledger.recent();

    Json(HistoryResponse {
        count: data.len(),
        data,
    })
}
