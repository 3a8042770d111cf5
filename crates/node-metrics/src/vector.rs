//! Metrics Vector Type

use crate::error::MetricsError;
use serde::{Deserialize, Serialize};

/// Number of metrics in a vector (matches the trained model's feature count)
pub const METRIC_COUNT: usize = 6;

/// Validated snapshot of six live operational metrics for one node.
///
/// Immutable once constructed. Readings have no upper bound: values past
/// realistic ranges simply saturate the risk score instead of failing
/// validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsVector {
    /// CPU utilization (%)
    pub cpu_pct: f64,
    /// Memory utilization (%)
    pub mem_pct: f64,
    /// Disk I/O throughput (MB/s)
    pub disk_io: f64,
    /// Network latency (ms)
    pub latency_ms: f64,
    /// Request error rate (%)
    pub error_rate_pct: f64,
    /// Queue backlog (messages)
    pub queue_len: f64,
}

impl MetricsVector {
    /// Build a validated vector. Every reading must be finite and non-negative.
    pub fn new(
        cpu_pct: f64,
        mem_pct: f64,
        disk_io: f64,
        latency_ms: f64,
        error_rate_pct: f64,
        queue_len: f64,
    ) -> Result<Self, MetricsError> {
        let vector = Self {
            cpu_pct,
            mem_pct,
            disk_io,
            latency_ms,
            error_rate_pct,
            queue_len,
        };
        vector.validate()?;
        Ok(vector)
    }

    /// Field name / value pairs in canonical feature order
    pub fn fields(&self) -> [(&'static str, f64); METRIC_COUNT] {
        [
            ("cpu", self.cpu_pct),
            ("memory", self.mem_pct),
            ("disk_io", self.disk_io),
            ("net_latency", self.latency_ms),
            ("error_rate", self.error_rate_pct),
            ("queue_length", self.queue_len),
        ]
    }

    /// Values in canonical feature order, as fed to the trained model
    pub fn as_array(&self) -> [f64; METRIC_COUNT] {
        [
            self.cpu_pct,
            self.mem_pct,
            self.disk_io,
            self.latency_ms,
            self.error_rate_pct,
            self.queue_len,
        ]
    }

    fn validate(&self) -> Result<(), MetricsError> {
        for (field, value) in self.fields() {
            if !value.is_finite() {
                return Err(MetricsError::NotFinite { field, value });
            }
            if value < 0.0 {
                return Err(MetricsError::Negative { field, value });
            }
        }
        Ok(())
    }
}
