// crates/config/src/loader.rs

use std::path::Path;
use sysmod_core::{SysmodError, SysmodResult};

use crate::SysmodConfig;

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load_from_file(path: &Path) -> SysmodResult<SysmodConfig> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SysmodError::Config(format!("Failed to read config: {}", e)))?;

        let config: SysmodConfig = toml::from_str(&content)
            .map_err(|e| SysmodError::Config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    pub fn save_to_file(path: &Path, config: &SysmodConfig) -> SysmodResult<()> {
        let content = toml::to_string_pretty(config)
            .map_err(|e| SysmodError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| SysmodError::Config(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Overrides individual settings from environment variables.
    pub fn apply_env_overrides(mut config: SysmodConfig) -> SysmodResult<SysmodConfig> {
        if let Ok(level) = std::env::var("SYSMOD_LOG_LEVEL") {
            config.app.log_level = level;
        }
        if let Ok(model) = std::env::var("SYSMOD_LLM_MODEL") {
            config.llm.model = model;
        }
        if let Ok(base_url) = std::env::var("SYSMOD_LLM_BASE_URL") {
            config.llm.base_url = Some(base_url);
        }
        if let Ok(port) = std::env::var("SYSMOD_API_PORT") {
            config.api.port = port
                .parse()
                .map_err(|_| SysmodError::Config("Invalid API port".to_string()))?;
        }

        Ok(config)
    }
}
