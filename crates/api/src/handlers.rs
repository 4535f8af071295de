// crates/api/src/handlers.rs

use std::sync::Arc;

use sysmod_core::LlmResponseEnvelope;
use sysmod_gateway::ModelingGateway;
use sysmod_observability::{metrics::MetricType, HealthStatus, MetricsCollector};

pub struct ApiHandlers {
    gateway: Arc<ModelingGateway>,
    metrics: Arc<MetricsCollector>,
}

impl ApiHandlers {
    pub fn new(gateway: Arc<ModelingGateway>, metrics: Arc<MetricsCollector>) -> Self {
        Self { gateway, metrics }
    }

    pub async fn generate_transfer_function_only(&self, description: &str) -> LlmResponseEnvelope {
        self.metrics.increment(MetricType::TotalRequests);
        let envelope = self.gateway.generate_transfer_function_only(description).await;
        self.track(&envelope, MetricType::GenerationsCompleted);
        envelope
    }

    pub async fn generate_full_analysis(&self, description: &str) -> LlmResponseEnvelope {
        self.metrics.increment(MetricType::TotalRequests);
        let envelope = self.gateway.generate_full_analysis(description).await;
        self.track(&envelope, MetricType::GenerationsCompleted);
        envelope
    }

    pub async fn validate_user_answer(
        &self,
        description: &str,
        user_transfer_function: &str,
    ) -> LlmResponseEnvelope {
        self.metrics.increment(MetricType::TotalRequests);
        let envelope = self
            .gateway
            .validate_user_answer(description, user_transfer_function)
            .await;
        self.track(&envelope, MetricType::ValidationsCompleted);
        envelope
    }

    pub fn health(&self) -> HealthStatus {
        self.metrics.get_health_status()
    }

    pub fn prometheus_metrics(&self) -> String {
        self.metrics.get_prometheus_metrics()
    }

    fn track(&self, envelope: &LlmResponseEnvelope, completed: MetricType) {
        if envelope.success {
            self.metrics.increment(completed);
        } else if envelope.raw_text.is_some() {
            self.metrics.increment(MetricType::MalformedResponses);
        } else {
            self.metrics.increment(MetricType::LlmFailures);
        }
    }
}
