// crates/llm_connector/src/gemini.rs

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use sysmod_core::{SysmodError, SysmodResult};

use crate::{api_key_from_env, LlmConfig, TextGenerator};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Google Generative Language API (`generateContent`) provider.
pub struct GeminiProvider {
    config: LlmConfig,
    client: Client,
    api_key: String,
}

impl GeminiProvider {
    pub fn new(config: LlmConfig) -> SysmodResult<Self> {
        let api_key = api_key_from_env(&config.api_key_env)?;
        Self::with_api_key(config, api_key)
    }

    pub fn with_api_key(config: LlmConfig, api_key: String) -> SysmodResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_s))
            .build()
            .map_err(|e| SysmodError::Network(format!("failed to build client: {}", e)))?;

        Ok(Self {
            config,
            client,
            api_key,
        })
    }

    fn endpoint(&self) -> String {
        let base = self
            .config
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/');

        format!("{}/v1beta/models/{}:generateContent", base, self.config.model)
    }
}

#[async_trait]
impl TextGenerator for GeminiProvider {
    async fn generate(&self, prompt: &str) -> SysmodResult<String> {
        let payload = json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": {
                "temperature": self.config.temperature,
                "maxOutputTokens": self.config.max_tokens,
            }
        });

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send()
            .await
            .map_err(|e| SysmodError::Network(format!("LLM request failed: {}", e)))?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(|e| SysmodError::Llm(format!("Failed to parse LLM response: {}", e)))?;

        if !status.is_success() {
            let message = body
                .pointer("/error/message")
                .and_then(Value::as_str)
                .map(|s| s.to_string());
            return Err(SysmodError::Llm(format!(
                "Gemini returned {}: {}",
                status,
                message.unwrap_or_else(|| body.to_string())
            )));
        }

        let text = body
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .ok_or_else(|| SysmodError::Llm("Missing candidate text in Gemini response".to_string()))?;

        Ok(text.to_string())
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn test_config(base_url: String) -> LlmConfig {
        LlmConfig {
            base_url: Some(base_url),
            ..LlmConfig::default()
        }
    }

    #[tokio::test]
    async fn extracts_candidate_text() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1beta/models/gemma-3-12b-it:generateContent")
                .query_param("key", "test-key");
            then.status(200).json_body(serde_json::json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "{\"transferFunction\": \"G(s) = 1/(Ms^2 + K)\"}" }] }
                }]
            }));
        });

        let provider =
            GeminiProvider::with_api_key(test_config(server.base_url()), "test-key".to_string())
                .unwrap();

        let text = provider.generate("mass-spring system").await.unwrap();

        mock.assert();
        assert_eq!(text, "{\"transferFunction\": \"G(s) = 1/(Ms^2 + K)\"}");
    }

    #[tokio::test]
    async fn maps_api_error_to_llm_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST);
            then.status(429).json_body(serde_json::json!({
                "error": { "message": "Resource has been exhausted" }
            }));
        });

        let provider =
            GeminiProvider::with_api_key(test_config(server.base_url()), "test-key".to_string())
                .unwrap();

        let err = provider.generate("anything").await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("429"));
        assert!(message.contains("Resource has been exhausted"));
    }

    #[tokio::test]
    async fn missing_candidates_is_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST);
            then.status(200).json_body(serde_json::json!({ "candidates": [] }));
        });

        let provider =
            GeminiProvider::with_api_key(test_config(server.base_url()), "test-key".to_string())
                .unwrap();

        assert!(provider.generate("anything").await.is_err());
    }
}
