//! # Arka
//!
//! Main entry point for the Arka service.

use arka::config::{AppConfig, LogConfig, LogFormat};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(log.include_target);

    match log.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.log);

    info!(
        service = %config.service_name,
        environment = %config.environment,
        "Starting Arka v{}",
        env!("CARGO_PKG_VERSION")
    );

    tokio::signal::ctrl_c().await?;
    info!("Shutting down Arka");

    Ok(())
}
