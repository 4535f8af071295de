// crates/llm_connector/src/openrouter.rs

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use sysmod_core::{SysmodError, SysmodResult};

use crate::{api_key_from_env, LlmConfig, TextGenerator};

pub struct OpenRouterProvider {
    config: LlmConfig,
    client: Client,
    api_key: String,
}

impl OpenRouterProvider {
    pub fn new(config: LlmConfig) -> SysmodResult<Self> {
        let api_key = api_key_from_env(&config.api_key_env)?;
        Self::with_api_key(config, api_key)
    }

    pub fn with_api_key(config: LlmConfig, api_key: String) -> SysmodResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_s))
            .build()
            .map_err(|e| SysmodError::Network(e.to_string()))?;

        Ok(Self {
            config,
            client,
            api_key,
        })
    }
}

#[async_trait]
impl TextGenerator for OpenRouterProvider {
    async fn generate(&self, prompt: &str) -> SysmodResult<String> {
        let url = self
            .config
            .base_url
            .as_ref()
            .map(|u| format!("{}/chat/completions", u.trim_end_matches('/')))
            .unwrap_or_else(|| "https://openrouter.ai/api/v1/chat/completions".to_string());

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "model": self.config.model,
                "messages": [{ "role": "user", "content": prompt }],
                "max_tokens": self.config.max_tokens,
                "temperature": self.config.temperature,
            }))
            .send()
            .await
            .map_err(|e| SysmodError::Network(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(SysmodError::Llm(format!("API error {}: {}", status, text)));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SysmodError::Llm(format!("Failed to parse response: {}", e)))?;

        let content = body
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .ok_or_else(|| SysmodError::Llm("Missing message content in response".to_string()))?;

        Ok(content.to_string())
    }

    fn name(&self) -> &str {
        "openrouter"
    }
}
