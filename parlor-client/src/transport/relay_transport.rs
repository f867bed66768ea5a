use crate::error::ClientError;
use async_trait::async_trait;
use parlor_core::{MessageKind, PeerId, PeerMessage};
use serde_json::Value;

/// One peer's view of the relay, bound to a single room and identity.
#[async_trait]
pub trait RelayTransport: Send + Sync {
    fn peer_id(&self) -> &PeerId;

    async fn send(
        &self,
        to: &PeerId,
        kind: MessageKind,
        payload: Option<Value>,
    ) -> Result<(), ClientError>;

    /// Drain everything queued for this peer.
    async fn poll(&self) -> Result<Vec<PeerMessage>, ClientError>;

    async fn leave(&self) -> Result<(), ClientError>;
}
