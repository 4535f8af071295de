// crates/llm_connector/src/lib.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sysmod_core::{SysmodError, SysmodResult};
use tracing::debug;

pub mod gemini;
pub mod openrouter;
pub mod prompt_builder;

pub use prompt_builder::PromptBuilder;

/// LLM configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub provider: LlmProviderKind,
    pub model: String,
    pub api_key_env: String,
    pub base_url: Option<String>,
    pub max_tokens: usize,
    pub temperature: f32,
    pub timeout_s: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProviderKind {
    Gemini,
    OpenRouter,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: LlmProviderKind::Gemini,
            model: "gemma-3-12b-it".to_string(),
            api_key_env: "GOOGLE_API_KEY".to_string(),
            base_url: None,
            max_tokens: 1024,
            temperature: 0.3,
            timeout_s: 30,
        }
    }
}

/// One prompt in, one text completion out. No streaming.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> SysmodResult<String>;
    fn name(&self) -> &str;
}

/// Provider facade selected from configuration.
pub struct LlmConnector {
    provider: Box<dyn TextGenerator>,
}

impl LlmConnector {
    pub fn new(config: LlmConfig) -> SysmodResult<Self> {
        let provider: Box<dyn TextGenerator> = match &config.provider {
            LlmProviderKind::Gemini => Box::new(gemini::GeminiProvider::new(config.clone())?),
            LlmProviderKind::OpenRouter => {
                Box::new(openrouter::OpenRouterProvider::new(config.clone())?)
            }
        };

        Ok(Self { provider })
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }
}

#[async_trait]
impl TextGenerator for LlmConnector {
    async fn generate(&self, prompt: &str) -> SysmodResult<String> {
        debug!(provider = self.provider.name(), prompt_chars = prompt.len(), "Dispatching LLM request");
        self.provider.generate(prompt).await
    }

    fn name(&self) -> &str {
        self.provider.name()
    }
}

pub(crate) fn api_key_from_env(api_key_env: &str) -> SysmodResult<String> {
    std::env::var(api_key_env)
        .map_err(|_| SysmodError::Config(format!("API key not found: {}", api_key_env)))
}
