// crates/config/src/validator.rs

use sysmod_core::{SysmodError, SysmodResult};
use tracing::warn;

use crate::SysmodConfig;

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(config: &SysmodConfig) -> SysmodResult<()> {
        // Validate LLM settings
        if config.llm.model.trim().is_empty() {
            return Err(SysmodError::Config("LLM model must not be empty".to_string()));
        }
        if config.llm.api_key_env.trim().is_empty() {
            return Err(SysmodError::Config(
                "LLM API key environment variable name must not be empty".to_string(),
            ));
        }
        if config.llm.max_tokens == 0 {
            return Err(SysmodError::Config("max_tokens must be > 0".to_string()));
        }
        if config.llm.temperature < 0.0 || config.llm.temperature > 2.0 {
            return Err(SysmodError::Config("Temperature must be 0.0-2.0".to_string()));
        }
        if config.llm.timeout_s == 0 {
            return Err(SysmodError::Config("LLM timeout must be > 0".to_string()));
        }

        if std::env::var(&config.llm.api_key_env).is_err() {
            warn!("API key variable {} is not set", config.llm.api_key_env);
        }

        // Validate API settings
        if config.api.port == 0 {
            return Err(SysmodError::Config("Invalid API port".to_string()));
        }

        Ok(())
    }
}
