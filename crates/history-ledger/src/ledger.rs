//! Ledger Implementation

use chrono::Local;
use hybrid_scorer::RiskTier;
use node_metrics::MetricsVector;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Mutex;
use tracing::debug;

/// Maximum events retained
pub const LEDGER_CAPACITY: usize = 10;

/// Snapshot of one scoring request. Created once per request, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringEvent {
    /// Local wall-clock time, HH:MM:SS
    pub time: String,
    /// Risk score at the time of scoring (2 decimals)
    pub risk: f64,
    /// Tier at the time of scoring
    pub level: RiskTier,
    pub cpu: f64,
    pub memory: f64,
    pub latency: f64,
    pub error: f64,
    pub queue: f64,
}

impl ScoringEvent {
    /// Capture a snapshot of a scored request at the current local time
    pub fn capture(risk: f64, level: RiskTier, metrics: &MetricsVector) -> Self {
        Self {
            time: Local::now().format("%H:%M:%S").to_string(),
            risk,
            level,
            cpu: metrics.cpu_pct,
            memory: metrics.mem_pct,
            latency: metrics.latency_ms,
            error: metrics.error_rate_pct,
            queue: metrics.queue_len,
        }
    }
}

/// Fixed-capacity, insertion-ordered ledger with FIFO eviction.
///
/// Constructor-provided and injected into the service rather than global.
/// All mutation happens under one mutex so the capacity invariant holds
/// when the surrounding service scores requests concurrently.
pub struct HistoryLedger {
    events: Mutex<VecDeque<ScoringEvent>>,
    capacity: usize,
}

impl HistoryLedger {
    /// Create a ledger with the standard capacity of [`LEDGER_CAPACITY`]
    pub fn new() -> Self {
        Self::with_capacity(LEDGER_CAPACITY)
    }

    /// Create a ledger with a custom capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Append an event, evicting the oldest when the ledger is full.
    /// Eviction and insert run as one critical section.
    pub fn append(&self, event: ScoringEvent) {
        let mut events = self.lock();
        while events.len() >= self.capacity {
            let evicted = events.pop_front();
            debug!(?evicted, "ledger full, evicted oldest event");
        }
        events.push_back(event);
    }

    /// Recent events, oldest first, at most the ledger capacity
    pub fn recent(&self) -> Vec<ScoringEvent> {
        self.lock().iter().cloned().collect()
    }

    /// Number of retained events
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the ledger holds no events
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<ScoringEvent>> {
        // A poisoned lock still holds a consistent deque; keep serving.
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for HistoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(n: usize) -> ScoringEvent {
        let metrics = MetricsVector::new(n as f64, 0.0, 0.0, 0.0, 0.0, 0.0).unwrap();
        ScoringEvent::capture(n as f64, RiskTier::Low, &metrics)
    }

    #[test]
    fn test_append_and_recent_order() {
        let ledger = HistoryLedger::new();
        for n in 0..5 {
            ledger.append(event(n));
        }

        let recent = ledger.recent();
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].cpu, 0.0); // oldest first
        assert_eq!(recent[4].cpu, 4.0);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let ledger = HistoryLedger::new();
        for n in 1..=11 {
            ledger.append(event(n));
        }

        // Events 2-11 retained, event 1 evicted
        let recent = ledger.recent();
        assert_eq!(recent.len(), LEDGER_CAPACITY);
        assert_eq!(recent[0].cpu, 2.0);
        assert_eq!(recent[9].cpu, 11.0);
    }

    #[test]
    fn test_capacity_never_exceeded() {
        let ledger = HistoryLedger::new();
        for n in 0..100 {
            ledger.append(event(n));
            assert!(ledger.len() <= LEDGER_CAPACITY);
        }
        assert_eq!(ledger.len(), LEDGER_CAPACITY);
    }

    #[test]
    fn test_concurrent_appends_hold_invariant() {
        use std::sync::Arc;

        let ledger = Arc::new(HistoryLedger::new());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let ledger = Arc::clone(&ledger);
                std::thread::spawn(move || {
                    for n in 0..50 {
                        ledger.append(event(t * 50 + n));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(ledger.len(), LEDGER_CAPACITY);
    }

    #[test]
    fn test_event_snapshot_fields() {
        let metrics = MetricsVector::new(90.0, 95.0, 50.0, 100.0, 1.0, 10.0).unwrap();
        let e = ScoringEvent::capture(65.0, RiskTier::Medium, &metrics);

        assert_eq!(e.risk, 65.0);
        assert_eq!(e.level, RiskTier::Medium);
        assert_eq!(e.latency, 100.0);
        assert_eq!(e.queue, 10.0);
        // HH:MM:SS
        assert_eq!(e.time.len(), 8);
        assert_eq!(e.time.matches(':').count(), 2);
    }
}
