// crates/config/src/lib.rs

use serde::{Deserialize, Serialize};
use std::path::Path;
use sysmod_core::SysmodResult;

pub mod loader;
pub mod validator;

pub use loader::ConfigLoader;
pub use validator::ConfigValidator;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SysmodConfig {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub llm: LlmSettings,
    #[serde(default)]
    pub api: ApiSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    pub provider: String,
    pub model: String,
    pub api_key_env: String,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_llm_max_tokens")]
    pub max_tokens: usize,
    #[serde(default = "default_llm_temperature")]
    pub temperature: f32,
    #[serde(default = "default_llm_timeout_s")]
    pub timeout_s: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    pub host: String,
    pub port: u16,
    pub cors_enabled: bool,
}

const fn default_llm_max_tokens() -> usize {
    1024
}

const fn default_llm_temperature() -> f32 {
    0.3
}

const fn default_llm_timeout_s() -> u64 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            model: "gemma-3-12b-it".to_string(),
            api_key_env: "GOOGLE_API_KEY".to_string(),
            base_url: None,
            max_tokens: default_llm_max_tokens(),
            temperature: default_llm_temperature(),
            timeout_s: default_llm_timeout_s(),
        }
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_enabled: true,
        }
    }
}

impl Default for SysmodConfig {
    fn default() -> Self {
        Self {
            app: AppConfig::default(),
            llm: LlmSettings::default(),
            api: ApiSettings::default(),
        }
    }
}

impl SysmodConfig {
    /// Loads configuration from an optional TOML file, applies environment
    /// overrides, and validates the result.
    pub fn load(path: Option<&Path>) -> SysmodResult<Self> {
        let config = match path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => SysmodConfig::default(),
        };

        let config = ConfigLoader::apply_env_overrides(config)?;
        ConfigValidator::validate(&config)?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SysmodConfig::default();
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: SysmodConfig = toml::from_str(
            r#"
            [llm]
            provider = "openrouter"
            model = "deepseek/deepseek-chat"
            api_key_env = "OPENROUTER_API_KEY"
            "#,
        )
        .unwrap();

        assert_eq!(config.llm.provider, "openrouter");
        assert_eq!(config.llm.max_tokens, 1024);
        assert_eq!(config.api.port, 8000);
    }
}
