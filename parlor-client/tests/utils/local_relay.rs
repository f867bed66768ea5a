use async_trait::async_trait;
use parlor_client::{ClientError, RelayTransport};
use parlor_core::{
    CreateRoomRequest, JoinRoomRequest, LeaveRoomRequest, MessageKind, PeerId, PeerMessage,
    PollRequest, RoomName, SendRequest,
};
use parlor_server::{RelayError, RelayService};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};

/// [`RelayTransport`] that calls an in-process relay directly, skipping HTTP.
pub struct LocalRelay {
    service: RelayService,
    room: RoomName,
    peer_id: PeerId,
    failing_polls: AtomicUsize,
}

impl LocalRelay {
    pub fn new(service: &RelayService, room: &str, peer_id: &str) -> Self {
        Self {
            service: service.clone(),
            room: RoomName::from(room),
            peer_id: PeerId::from(peer_id),
            failing_polls: AtomicUsize::new(0),
        }
    }

    /// Make the next `count` polls fail as if the network were down.
    pub fn fail_next_polls(&self, count: usize) {
        self.failing_polls.store(count, Ordering::SeqCst);
    }

    pub fn create_room(&self, password: &str) -> Result<(), ClientError> {
        self.service
            .create(CreateRoomRequest::new(self.room.as_str(), password))
            .map_err(rejected)
    }

    pub fn join(&self, password: &str) -> Result<(), ClientError> {
        self.service
            .join(JoinRoomRequest::new(
                self.room.as_str(),
                password,
                self.peer_id.as_str(),
            ))
            .map_err(rejected)
    }
}

fn rejected(e: RelayError) -> ClientError {
    ClientError::Rejected(e.code())
}

#[async_trait]
impl RelayTransport for LocalRelay {
    fn peer_id(&self) -> &PeerId {
        &self.peer_id
    }

    async fn send(
        &self,
        to: &PeerId,
        kind: MessageKind,
        payload: Option<Value>,
    ) -> Result<(), ClientError> {
        self.service
            .send(SendRequest::new(
                self.room.as_str(),
                to.as_str(),
                kind,
                self.peer_id.as_str(),
                payload,
            ))
            .map_err(rejected)
    }

    async fn poll(&self) -> Result<Vec<PeerMessage>, ClientError> {
        let failing = self
            .failing_polls
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
        if failing.is_ok() {
            return Err(ClientError::Protocol("simulated outage".into()));
        }

        Ok(self
            .service
            .poll(PollRequest::new(self.room.as_str(), self.peer_id.as_str())))
    }

    async fn leave(&self) -> Result<(), ClientError> {
        self.service
            .leave(LeaveRoomRequest::new(self.room.as_str(), self.peer_id.as_str()))
            .map_err(rejected)
    }
}
