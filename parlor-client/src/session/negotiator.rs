use crate::error::ClientError;
use crate::session::{NegotiationState, Role, SessionBackend};
use crate::transport::RelayTransport;
use parlor_core::{IceCandidate, MessageKind, PeerId, PeerMessage, SessionDescription, Signal};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Offer/answer state machine for one peer and at most one remote partner.
///
/// Messages are fed in the order the relay delivered them. A failed offer or
/// answer is returned to the caller and the state falls back to where it was;
/// candidate failures are dropped. `Closed` is final.
pub struct Negotiator {
    role: Role,
    peer_id: PeerId,
    state: NegotiationState,
    remote_peer: Option<PeerId>,
    backend: Arc<dyn SessionBackend>,
    relay: Arc<dyn RelayTransport>,
    state_tx: watch::Sender<NegotiationState>,
}

impl Negotiator {
    pub fn new(
        role: Role,
        backend: Arc<dyn SessionBackend>,
        relay: Arc<dyn RelayTransport>,
    ) -> Self {
        let (state_tx, _) = watch::channel(NegotiationState::Idle);
        Self {
            role,
            peer_id: relay.peer_id().clone(),
            state: NegotiationState::Idle,
            remote_peer: None,
            backend,
            relay,
            state_tx,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn state(&self) -> NegotiationState {
        self.state
    }

    pub fn remote_peer(&self) -> Option<&PeerId> {
        self.remote_peer.as_ref()
    }

    pub fn subscribe(&self) -> watch::Receiver<NegotiationState> {
        self.state_tx.subscribe()
    }

    pub async fn handle(&mut self, message: PeerMessage) -> Result<(), ClientError> {
        if message.from == self.peer_id {
            return Ok(());
        }
        if self.state.is_closed() {
            debug!("Session closed, ignoring {} from {}", message.kind, message.from);
            return Ok(());
        }

        let signal = match message.signal() {
            Ok(signal) => signal,
            Err(e) if message.kind == MessageKind::Ice => {
                debug!("Ignoring undecodable candidate from {}: {}", message.from, e);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        let from = message.from;

        match signal {
            Signal::Join => self.on_join(from).await,
            Signal::Offer(offer) => self.on_offer(from, offer).await,
            Signal::Answer(answer) => self.on_answer(from, answer).await,
            Signal::Ice(candidate) => {
                self.on_remote_candidate(from, candidate).await;
                Ok(())
            }
            Signal::Leave => {
                self.on_leave(from).await;
                Ok(())
            }
        }
    }

    /// Offer again to the peer already known. Host only.
    pub async fn start_call(&mut self) -> Result<(), ClientError> {
        if self.role != Role::Host {
            return Err(ClientError::Protocol("only the host starts a call".into()));
        }
        if self.state.is_closed() {
            return Err(ClientError::SessionEnded);
        }
        let Some(peer) = self.remote_peer.clone() else {
            return Err(ClientError::Protocol("no peer has joined yet".into()));
        };
        self.offer_to(peer).await
    }

    /// Forward a locally discovered candidate to the paired peer, if any.
    pub async fn local_candidate(&mut self, candidate: IceCandidate) {
        if self.state.is_closed() {
            return;
        }
        let Some(peer) = self.remote_peer.as_ref() else {
            debug!("No peer yet, dropping local candidate");
            return;
        };
        let payload = Signal::Ice(candidate).payload();
        if let Err(e) = self.relay.send(peer, MessageKind::Ice, payload).await {
            debug!("Failed to send candidate to {}: {}", peer, e);
        }
    }

    /// Tear down the media side. Idempotent.
    pub async fn close(&mut self) {
        if self.state.is_closed() {
            return;
        }
        if let Err(e) = self.backend.close().await {
            warn!("Failed to close session backend: {:#}", e);
        }
        self.set_state(NegotiationState::Closed);
    }

    async fn on_join(&mut self, from: PeerId) -> Result<(), ClientError> {
        if self.role != Role::Host {
            return Ok(());
        }
        if let Some(peer) = &self.remote_peer {
            debug!("Already paired with {}, ignoring join from {}", peer, from);
            return Ok(());
        }

        info!("{} joined, sending offer", from);
        self.remote_peer = Some(from.clone());
        self.offer_to(from).await
    }

    async fn on_offer(
        &mut self,
        from: PeerId,
        offer: SessionDescription,
    ) -> Result<(), ClientError> {
        if self.role == Role::Host {
            warn!("Host received an offer from {}, ignoring", from);
            return Ok(());
        }
        if let Some(peer) = self.remote_peer.as_ref().filter(|peer| **peer != from) {
            warn!("Already paired with {}, ignoring offer from {}", peer, from);
            return Ok(());
        }

        self.remote_peer = Some(from.clone());
        let previous = self.state;
        self.set_state(NegotiationState::Answering);

        match self.answer(&from, offer).await {
            Ok(()) => {
                self.set_state(NegotiationState::Connected);
                Ok(())
            }
            Err(e) => {
                self.set_state(previous);
                Err(e)
            }
        }
    }

    async fn on_answer(
        &mut self,
        from: PeerId,
        answer: SessionDescription,
    ) -> Result<(), ClientError> {
        if self.role != Role::Host
            || self.state != NegotiationState::Offered
            || self.remote_peer.as_ref() != Some(&from)
        {
            warn!("Unexpected answer from {} while {}, ignoring", from, self.state);
            return Ok(());
        }

        self.backend
            .apply_answer(answer)
            .await
            .map_err(ClientError::Backend)?;
        self.set_state(NegotiationState::Connected);
        Ok(())
    }

    async fn on_remote_candidate(&mut self, from: PeerId, candidate: IceCandidate) {
        if self.remote_peer.as_ref() != Some(&from) {
            debug!("Ignoring candidate from unpaired peer {}", from);
            return;
        }
        if let Err(e) = self.backend.add_ice_candidate(candidate).await {
            debug!("Ignoring candidate from {}: {:#}", from, e);
        }
    }

    async fn on_leave(&mut self, from: PeerId) {
        if self.remote_peer.as_ref() != Some(&from) {
            return;
        }
        info!("{} left, hanging up", from);
        self.close().await;
    }

    async fn offer_to(&mut self, peer: PeerId) -> Result<(), ClientError> {
        let previous = self.state;
        self.set_state(NegotiationState::Offering);

        match self.offer(&peer).await {
            Ok(()) => {
                self.set_state(NegotiationState::Offered);
                Ok(())
            }
            Err(e) => {
                self.set_state(previous);
                Err(e)
            }
        }
    }

    async fn offer(&self, peer: &PeerId) -> Result<(), ClientError> {
        let offer = self
            .backend
            .create_offer()
            .await
            .map_err(ClientError::Backend)?;
        self.relay
            .send(peer, MessageKind::Offer, Signal::Offer(offer).payload())
            .await
    }

    async fn answer(&self, peer: &PeerId, offer: SessionDescription) -> Result<(), ClientError> {
        let answer = self
            .backend
            .accept_offer(offer)
            .await
            .map_err(ClientError::Backend)?;
        self.relay
            .send(peer, MessageKind::Answer, Signal::Answer(answer).payload())
            .await
    }

    fn set_state(&mut self, next: NegotiationState) {
        if self.state != next {
            debug!("{}: {} -> {}", self.peer_id, self.state, next);
        }
        self.state = next;
        self.state_tx.send_replace(next);
    }
}
