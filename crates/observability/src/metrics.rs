// crates/observability/src/metrics.rs

use std::collections::HashMap;

use prometheus::proto::MetricFamily;
use prometheus::{IntCounter, Registry};
use tracing::error;

use crate::MetricsSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricType {
    TotalRequests,
    GenerationsCompleted,
    ValidationsCompleted,
    LlmFailures,
    MalformedResponses,
}

impl MetricType {
    const ALL: [MetricType; 5] = [
        MetricType::TotalRequests,
        MetricType::GenerationsCompleted,
        MetricType::ValidationsCompleted,
        MetricType::LlmFailures,
        MetricType::MalformedResponses,
    ];

    fn name(&self) -> &'static str {
        match self {
            MetricType::TotalRequests => "sysmod_requests_total",
            MetricType::GenerationsCompleted => "sysmod_generations_completed_total",
            MetricType::ValidationsCompleted => "sysmod_validations_completed_total",
            MetricType::LlmFailures => "sysmod_llm_failures_total",
            MetricType::MalformedResponses => "sysmod_malformed_responses_total",
        }
    }

    fn help(&self) -> &'static str {
        match self {
            MetricType::TotalRequests => "Total inbound API requests",
            MetricType::GenerationsCompleted => "Successful generation responses",
            MetricType::ValidationsCompleted => "Successful validation responses",
            MetricType::LlmFailures => "Upstream LLM transport/API failures",
            MetricType::MalformedResponses => "LLM completions that failed JSON parsing",
        }
    }
}

pub struct Metrics {
    registry: Registry,
    counters: HashMap<MetricType, IntCounter>,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();
        let mut counters = HashMap::new();

        for metric in MetricType::ALL {
            match IntCounter::new(metric.name(), metric.help()) {
                Ok(counter) => {
                    if let Err(e) = registry.register(Box::new(counter.clone())) {
                        error!("Failed to register {}: {}", metric.name(), e);
                    }
                    counters.insert(metric, counter);
                }
                Err(e) => error!("Failed to create {}: {}", metric.name(), e),
            }
        }

        Self { registry, counters }
    }

    pub fn increment(&self, metric: MetricType) {
        if let Some(counter) = self.counters.get(&metric) {
            counter.inc();
        }
    }

    pub fn get(&self, metric: MetricType) -> u64 {
        self.counters.get(&metric).map(IntCounter::get).unwrap_or(0)
    }

    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }

    pub fn get_summary(&self) -> MetricsSummary {
        MetricsSummary {
            total_requests: self.get(MetricType::TotalRequests),
            generations_completed: self.get(MetricType::GenerationsCompleted),
            validations_completed: self.get(MetricType::ValidationsCompleted),
            llm_failures: self.get(MetricType::LlmFailures),
            malformed_responses: self.get(MetricType::MalformedResponses),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
