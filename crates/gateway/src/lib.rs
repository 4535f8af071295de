// crates/gateway/src/lib.rs

use std::sync::Arc;

use sysmod_core::LlmResponseEnvelope;
use sysmod_llm_connector::{PromptBuilder, TextGenerator};
use tracing::{debug, warn};

pub mod extract;

/// Prompt-Response Gateway. Renders one of three fixed prompt templates,
/// makes a single generation call, and maps the outcome into a uniform
/// envelope. Both transport failures and unparseable completions are
/// recovered here; none of the operations returns `Err`.
pub struct ModelingGateway {
    generator: Arc<dyn TextGenerator>,
    prompts: PromptBuilder,
}

impl ModelingGateway {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            prompts: PromptBuilder::new(),
        }
    }

    /// Returns a JSON object with a single `transferFunction` key.
    pub async fn generate_transfer_function_only(&self, description: &str) -> LlmResponseEnvelope {
        let prompt = self.prompts.build_transfer_function_prompt(description);
        self.ask(prompt).await
    }

    /// Returns the five-key analysis: applied law, differential equation,
    /// Laplace steps, transfer function, and result discussion.
    pub async fn generate_full_analysis(&self, description: &str) -> LlmResponseEnvelope {
        let prompt = self.prompts.build_full_analysis_prompt(description);
        self.ask(prompt).await
    }

    /// Asks the model to judge a user-proposed transfer function.
    pub async fn validate_user_answer(
        &self,
        description: &str,
        user_transfer_function: &str,
    ) -> LlmResponseEnvelope {
        let prompt = self
            .prompts
            .build_validation_prompt(description, user_transfer_function);
        self.ask(prompt).await
    }

    async fn ask(&self, prompt: String) -> LlmResponseEnvelope {
        let raw = match self.generator.generate(&prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(provider = self.generator.name(), "LLM call failed: {}", e);
                return LlmResponseEnvelope::transport(format!("LLM API failure: {}", e));
            }
        };

        match extract::parse_json_payload(&raw) {
            Ok(data) => {
                debug!("LLM returned parseable JSON");
                LlmResponseEnvelope::ok(data)
            }
            Err(e) => {
                warn!("LLM returned non-JSON output: {}", e);
                LlmResponseEnvelope::invalid_json(raw)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use sysmod_core::{SysmodError, SysmodResult};

    /// Test double that replays a canned outcome.
    struct ScriptedGenerator {
        outcome: Result<String, String>,
    }

    impl ScriptedGenerator {
        fn text(raw: &str) -> Arc<dyn TextGenerator> {
            Arc::new(Self {
                outcome: Ok(raw.to_string()),
            })
        }

        fn failing(message: &str) -> Arc<dyn TextGenerator> {
            Arc::new(Self {
                outcome: Err(message.to_string()),
            })
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, _prompt: &str) -> SysmodResult<String> {
            self.outcome
                .clone()
                .map_err(SysmodError::Network)
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    #[tokio::test]
    async fn fenced_json_becomes_success_envelope() {
        let gateway = ModelingGateway::new(ScriptedGenerator::text(
            "```json\n{\"transferFunction\":\"G(s) = 1/(RCs+1)\"}\n```",
        ));

        let envelope = gateway.generate_transfer_function_only("RC circuit").await;

        assert!(envelope.success);
        assert_eq!(
            envelope.data,
            Some(json!({"transferFunction": "G(s) = 1/(RCs+1)"}))
        );
        assert!(envelope.error.is_none());
    }

    #[tokio::test]
    async fn non_json_output_preserves_raw_text() {
        let gateway = ModelingGateway::new(ScriptedGenerator::text("not json at all"));

        let envelope = gateway.generate_full_analysis("RC circuit").await;

        assert!(!envelope.success);
        assert!(envelope.error.is_some());
        assert_eq!(envelope.raw_text.as_deref(), Some("not json at all"));
        assert!(envelope.data.is_none());
    }

    #[tokio::test]
    async fn transport_failure_is_recovered_into_envelope() {
        let gateway = ModelingGateway::new(ScriptedGenerator::failing("connection refused"));

        let envelope = gateway
            .validate_user_answer("RC circuit", "G(s) = R/(RCs+1)")
            .await;

        assert!(!envelope.success);
        let error = envelope.error.unwrap();
        assert!(error.contains("connection refused"));
        assert!(envelope.raw_text.is_none());
    }

    #[tokio::test]
    async fn identical_responses_yield_identical_envelopes() {
        let gateway = ModelingGateway::new(ScriptedGenerator::text(
            "{\"isCorrect\": true, \"feedback\": \"well done\", \"correctSolution\": \"G(s) = R/(RCs+1)\"}",
        ));

        let first = gateway
            .validate_user_answer("RC circuit", "G(s) = R/(RCs+1)")
            .await;
        let second = gateway
            .validate_user_answer("RC circuit", "G(s) = R/(RCs+1)")
            .await;

        assert_eq!(first, second);
    }
}
