use anyhow::Result;
use async_trait::async_trait;
use parlor_core::{IceCandidate, SessionDescription};

/// The media side of a session: whatever produces offers and answers and
/// consumes remote candidates.
#[async_trait]
pub trait SessionBackend: Send + Sync {
    /// Create a local offer and install it as the local description.
    async fn create_offer(&self) -> Result<SessionDescription>;

    /// Apply a remote offer, then create and install the matching answer.
    async fn accept_offer(&self, offer: SessionDescription) -> Result<SessionDescription>;

    async fn apply_answer(&self, answer: SessionDescription) -> Result<()>;

    async fn add_ice_candidate(&self, candidate: IceCandidate) -> Result<()>;

    async fn close(&self) -> Result<()>;
}
