//! Duel server binary.
//!
//! Composition root: loads configuration, installs logging, builds the shared
//! [`DuelService`] and serves the HTTP routes until Ctrl-C.
mod config;
mod error;
mod logging;
mod routes;

use anyhow::{Context, Result};
use config::ServerConfig;
use duel_runtime::DuelService;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ServerConfig::from_env();

    // Guard must outlive the server so buffered file logs are flushed.
    let _log_guard = logging::setup_logging(config.log_dir.as_deref())?;

    for fallback in &config.fallbacks {
        tracing::warn!("{fallback}");
    }

    let service = DuelService::in_memory(config.runtime_config());
    let app = routes::build_router(service);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        recent_log = config.recent_log_window,
        "{} listening",
        routes::SERVICE_NAME
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
