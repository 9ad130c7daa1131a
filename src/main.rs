//! Secrets Sidecar - a local cache in front of AWS Secrets Manager

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use secrets_sidecar::api::{create_router, AppState};
use secrets_sidecar::upstream::AwsSecretsManagerClient;
use secrets_sidecar::{spawn_cleanup_task, Config};

/// Main entry point for the secrets sidecar.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build the Secrets Manager client, cache and fetcher
/// 4. Start background TTL cleanup task (when caching is enabled)
/// 5. Serve HTTP until SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "secrets_sidecar=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting secrets sidecar");

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_enabled={}, cache_size={}, ttl={}s, port={}, cleanup_interval={}s",
        config.cache_enabled,
        config.cache_size,
        config.ttl_seconds,
        config.http_port,
        config.cleanup_interval
    );

    let client = AwsSecretsManagerClient::from_config(&config).await;
    let state = AppState::from_config(&config, Arc::new(client));
    info!("Secret cache initialized");

    let cleanup_handle = if state.cache().is_enabled() {
        Some(spawn_cleanup_task(
            state.cache().clone(),
            config.cleanup_interval,
        ))
    } else {
        info!("Caching disabled, every request goes to Secrets Manager");
        None
    };

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Secrets sidecar listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM), then stops the cleanup task.
async fn shutdown_signal(cleanup_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if let Some(handle) = cleanup_handle {
        handle.abort();
        warn!("Cleanup task aborted");
    }
}
