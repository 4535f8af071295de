// src/app.rs

use std::sync::Arc;

use sysmod_api::{handlers::ApiHandlers, ApiConfig, ApiServer};
use sysmod_config::SysmodConfig;
use sysmod_core::{SysmodError, SysmodResult};
use sysmod_gateway::ModelingGateway;
use sysmod_llm_connector::{LlmConfig, LlmConnector, LlmProviderKind, TextGenerator};
use sysmod_observability::MetricsCollector;
use tokio::signal;
use tracing::{error, info};

pub struct SysmodApp {
    api_server: ApiServer,
}

impl SysmodApp {
    pub fn new(config: SysmodConfig) -> SysmodResult<Self> {
        info!("Initializing sysmod components...");

        let metrics = Arc::new(MetricsCollector::new());

        let connector = LlmConnector::new(llm_config(&config)?)?;
        info!("LLM provider: {}", connector.provider_name());

        let generator: Arc<dyn TextGenerator> = Arc::new(connector);
        let gateway = Arc::new(ModelingGateway::new(generator));

        let handlers = Arc::new(ApiHandlers::new(gateway, metrics));
        let api_server = ApiServer::new(
            ApiConfig {
                host: config.api.host.clone(),
                port: config.api.port,
                cors_enabled: config.api.cors_enabled,
            },
            handlers,
        );

        Ok(Self { api_server })
    }

    pub async fn run(self) -> SysmodResult<()> {
        info!("Starting sysmod API server...");

        let server = tokio::spawn(async move {
            if let Err(e) = self.api_server.serve().await {
                error!("API server error: {}", e);
            }
        });

        wait_for_shutdown().await?;

        server.abort();
        Ok(())
    }
}

fn llm_config(config: &SysmodConfig) -> SysmodResult<LlmConfig> {
    let provider = match config.llm.provider.as_str() {
        "gemini" => LlmProviderKind::Gemini,
        "openrouter" => LlmProviderKind::OpenRouter,
        other => {
            return Err(SysmodError::Config(format!(
                "Unsupported LLM provider: {}",
                other
            )));
        }
    };

    Ok(LlmConfig {
        provider,
        model: config.llm.model.clone(),
        api_key_env: config.llm.api_key_env.clone(),
        base_url: config.llm.base_url.clone(),
        max_tokens: config.llm.max_tokens,
        temperature: config.llm.temperature,
        timeout_s: config.llm.timeout_s,
    })
}

async fn wait_for_shutdown() -> SysmodResult<()> {
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Received shutdown signal");
            Ok(())
        }
        Err(e) => {
            error!("Failed to listen for shutdown signal: {}", e);
            Err(SysmodError::Unknown(e.to_string()))
        }
    }
}
