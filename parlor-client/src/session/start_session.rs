use crate::config::SessionConfig;
use crate::error::ClientError;
use crate::rtc::RtcSession;
use crate::session::{SessionBackend, SessionDriver, SessionHandle};
use crate::transport::HttpRelay;
use std::sync::Arc;

/// Enter the configured room over HTTP and run a WebRTC session in it.
pub async fn start_session(config: SessionConfig) -> Result<SessionHandle, ClientError> {
    let (backend, candidate_rx) = RtcSession::new(&config.ice_servers)
        .await
        .map_err(ClientError::Backend)?;

    let relay = HttpRelay::new(config.relay_url, config.room, config.peer_id);
    if let Err(e) = relay.enter(&config.password, config.role).await {
        let _ = backend.close().await;
        return Err(e);
    }

    Ok(SessionDriver::spawn(
        config.role,
        Arc::new(relay),
        Arc::new(backend),
        candidate_rx,
        config.poll_interval,
    ))
}
