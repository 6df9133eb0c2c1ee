use std::sync::Arc;

use anyhow::{Context, Result};
use chat_gateway::{config::Config, routes, state::AppState};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("chat_gateway=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;

    info!(
        model = %config.model,
        upstream = %config.ollama_host,
        max_attempts = config.retry.max_attempts,
        retry_delay_ms = config.retry.delay.as_millis() as u64,
        "Starting chat gateway"
    );
    if config.upstream_timeout.is_none() {
        warn!("No upstream timeout configured; a hung model call will stall its request");
    }

    let listener = tokio::net::TcpListener::bind(config.bind_target())
        .await
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;
    let addr = listener.local_addr()?;

    let state = Arc::new(AppState::with_ollama(config));
    let app = routes::create_router().with_state(state);

    info!("Chat gateway listening on http://{addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
