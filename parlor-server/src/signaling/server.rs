use crate::config::RelayConfig;
use crate::room::{RoomDirectory, spawn_reaper};
use crate::signaling::{RelayService, router};
use anyhow::{Context, Result};
use std::future::Future;
use tokio::net::TcpListener;
use tracing::info;

/// Bind `config.bind_addr` and serve the relay until `shutdown` resolves.
pub async fn serve<F>(config: RelayConfig, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    let service = RelayService::new(RoomDirectory::new(config.max_queue_len));
    serve_with(listener, service, &config, shutdown).await
}

/// Serve an already-built relay on `listener`. The idle reaper runs for as
/// long as the server does.
pub async fn serve_with<F>(
    listener: TcpListener,
    service: RelayService,
    config: &RelayConfig,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    config.validate().context("Invalid relay configuration")?;

    let reaper = config.peer_idle_timeout.map(|timeout| {
        spawn_reaper(service.directory().clone(), timeout, config.reap_interval)
    });

    let addr = listener.local_addr().context("Listener has no local address")?;
    info!("Signaling relay listening on http://{}", addr);

    let result = axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown)
        .await;

    if let Some(reaper) = reaper {
        reaper.abort();
    }
    info!("Signaling relay stopped");

    result.context("Relay server failed")
}
