use crate::error::ClientError;
use crate::session::Role;
use crate::transport::RelayTransport;
use async_trait::async_trait;
use parlor_core::{
    CreateRoomRequest, ErrorCode, JoinRoomRequest, LeaveRoomRequest, MessageKind, PeerId,
    PeerMessage, PollRequest, RelayResponse, RoomName, SendRequest,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

/// [`RelayTransport`] over the relay's JSON-over-HTTP endpoints.
#[derive(Clone)]
pub struct HttpRelay {
    http: reqwest::Client,
    base_url: String,
    room: RoomName,
    peer_id: PeerId,
}

impl HttpRelay {
    pub fn new(base_url: impl Into<String>, room: RoomName, peer_id: PeerId) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, room, peer_id)
    }

    pub fn with_client(
        http: reqwest::Client,
        base_url: impl Into<String>,
        room: RoomName,
        peer_id: PeerId,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            http,
            base_url,
            room,
            peer_id,
        }
    }

    pub fn room(&self) -> &RoomName {
        &self.room
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn health(&self) -> Result<(), ClientError> {
        self.http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn create_room(&self, password: &str) -> Result<(), ClientError> {
        let req = CreateRoomRequest::new(self.room.as_str(), password);
        self.call("/api/rooms/create", &req).await?;
        info!("Created room '{}'", self.room);
        Ok(())
    }

    pub async fn join(&self, password: &str) -> Result<(), ClientError> {
        let req = JoinRoomRequest::new(self.room.as_str(), password, self.peer_id.as_str());
        self.call("/api/rooms/join", &req).await?;
        info!("Joined room '{}' as {}", self.room, self.peer_id);
        Ok(())
    }

    /// Enter the room in the given role. A host creates the room first; a
    /// room that already exists is not an error, so a host can re-enter.
    pub async fn enter(&self, password: &str, role: Role) -> Result<(), ClientError> {
        if role == Role::Host {
            match self.create_room(password).await {
                Ok(()) => {}
                Err(ClientError::Rejected(ErrorCode::RoomAlreadyExists)) => {
                    debug!("Room '{}' already exists, joining it", self.room);
                }
                Err(e) => return Err(e),
            }
        }
        self.join(password).await
    }

    async fn call<B>(&self, path: &str, body: &B) -> Result<RelayResponse, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        let status = response.status();
        let body: RelayResponse = response.json().await?;

        if body.ok {
            return Ok(body);
        }
        match body.error {
            Some(code) => Err(ClientError::Rejected(code)),
            None => Err(ClientError::Protocol(format!(
                "relay answered {} without an error code",
                status
            ))),
        }
    }
}

#[async_trait]
impl RelayTransport for HttpRelay {
    fn peer_id(&self) -> &PeerId {
        &self.peer_id
    }

    async fn send(
        &self,
        to: &PeerId,
        kind: MessageKind,
        payload: Option<Value>,
    ) -> Result<(), ClientError> {
        let req = SendRequest::new(
            self.room.as_str(),
            to.as_str(),
            kind,
            self.peer_id.as_str(),
            payload,
        );
        self.call("/api/rooms/send", &req).await?;
        Ok(())
    }

    async fn poll(&self) -> Result<Vec<PeerMessage>, ClientError> {
        let req = PollRequest::new(self.room.as_str(), self.peer_id.as_str());
        let body = self.call("/api/rooms/poll", &req).await?;
        Ok(body.messages.unwrap_or_default())
    }

    async fn leave(&self) -> Result<(), ClientError> {
        let req = LeaveRoomRequest::new(self.room.as_str(), self.peer_id.as_str());
        self.call("/api/rooms/leave", &req).await?;
        info!("Left room '{}'", self.room);
        Ok(())
    }
}
