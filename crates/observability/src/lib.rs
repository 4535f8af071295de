// crates/observability/src/lib.rs

use prometheus::{Encoder, TextEncoder};
use serde::Serialize;
use std::time::Instant;
use tracing::error;

pub mod metrics;

use metrics::{MetricType, Metrics};

/// Metrics collector
pub struct MetricsCollector {
    metrics: Metrics,
    start_time: Instant,
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self {
            metrics: Metrics::new(),
            start_time: Instant::now(),
        }
    }

    pub fn increment(&self, metric: MetricType) {
        self.metrics.increment(metric);
    }

    pub fn get(&self, metric: MetricType) -> u64 {
        self.metrics.get(metric)
    }

    pub fn get_prometheus_metrics(&self) -> String {
        let encoder = TextEncoder::new();
        let metric_families = self.metrics.gather();
        let mut buffer = vec![];
        if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
            error!("Failed to encode metrics: {}", e);
            return String::new();
        }
        String::from_utf8(buffer).unwrap_or_default()
    }

    pub fn get_health_status(&self) -> HealthStatus {
        HealthStatus {
            healthy: true,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            metrics: self.metrics.get_summary(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub healthy: bool,
    pub uptime_seconds: u64,
    pub version: String,
    pub metrics: MetricsSummary,
}

#[derive(Debug, Serialize)]
pub struct MetricsSummary {
    pub total_requests: u64,
    pub generations_completed: u64,
    pub validations_completed: u64,
    pub llm_failures: u64,
    pub malformed_responses: u64,
}
