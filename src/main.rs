// src/main.rs

use anyhow::Result;
use std::path::PathBuf;
use sysmod_config::SysmodConfig;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;

use app::SysmodApp;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    info!("Starting sysmod modeling API v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config()?;

    let app = SysmodApp::new(config)?;
    app.run().await?;

    info!("sysmod shut down successfully");
    Ok(())
}

fn init_logging() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sysmod=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    Ok(())
}

fn load_config() -> Result<SysmodConfig> {
    let path = std::env::var("SYSMOD_CONFIG").ok().map(PathBuf::from);
    let config = SysmodConfig::load(path.as_deref())?;
    Ok(config)
}
