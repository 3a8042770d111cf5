//! Scoring History
//!
//! Bounded, insertion-ordered ledger of recent scoring events for operator
//! trend visibility.

mod ledger;

pub use ledger::{HistoryLedger, ScoringEvent, LEDGER_CAPACITY};
