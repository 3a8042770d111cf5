//! Risk Scoring API Server
//!
//! Thin JSON layer over the hybrid scoring engine. All decision logic lives
//! in the engine crates; this crate only parses requests, calls the scorer,
//! appends to the history ledger, and renders responses.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use history_ledger::HistoryLedger;
use hybrid_scorer::HybridScorer;
use learned_estimator::LearnedEstimator;
use node_metrics::MetricsError;

mod routes;
mod settings;

pub use settings::Settings;

/// Application state shared across handlers.
///
/// The scorer is read-only after startup; the ledger carries its own lock.
pub struct AppState {
    /// Hybrid scoring engine
    pub scorer: HybridScorer,
    /// Bounded history of recent scoring events
    pub ledger: HistoryLedger,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Build state, loading the estimator artifact at `model_path` if present
    pub fn new(model_path: &Path) -> Self {
        Self::with_estimator(LearnedEstimator::from_path(model_path))
    }

    /// State with an explicit estimator, also used by tests
    pub fn with_estimator(estimator: LearnedEstimator) -> Self {
        Self {
            scorer: HybridScorer::new(estimator),
            ledger: HistoryLedger::new(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }
}

/// Errors surfaced to API callers
#[derive(Debug, Error)]
pub enum ApiError {
    /// A metric field failed validation
    #[error(transparent)]
    InvalidInput(#[from] MetricsError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub estimator: EstimatorStatus,
    pub history_len: usize,
}

/// Estimator mode report
#[derive(Debug, Serialize)]
pub struct EstimatorStatus {
    pub mode: String,
    pub model_loaded: bool,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/score", post(routes::score::post_score))
        .route("/api/v1/history", get(routes::history::get_history))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let model_loaded = state.scorer.estimator_loaded();
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        estimator: EstimatorStatus {
            mode: if model_loaded { "hybrid" } else { "rule-only" }.to_string(),
            model_loaded,
        },
        history_len: state.ledger.len(),
    };

    Json(response)
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the server
pub async fn run_server(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState::new(Path::new(&settings.model_path)));
    let app = create_router(state);

    info!("starting API server on {}", settings.listen_addr);

    let listener = tokio::net::TcpListener::bind(&settings.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
