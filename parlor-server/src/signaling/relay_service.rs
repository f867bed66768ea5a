use crate::error::RelayError;
use crate::room::RoomDirectory;
use parlor_core::{
    CreateRoomRequest, JoinRoomRequest, LeaveRoomRequest, PeerId, PeerMessage, PollRequest,
    RoomName, SendRequest,
};
use tracing::debug;

/// Request-handling layer over the [`RoomDirectory`].
///
/// Every operation checks that its fields are present before touching any
/// state; the directory then enforces the room preconditions atomically.
#[derive(Clone, Default)]
pub struct RelayService {
    directory: RoomDirectory,
}

impl RelayService {
    pub fn new(directory: RoomDirectory) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &RoomDirectory {
        &self.directory
    }

    pub fn create(&self, req: CreateRoomRequest) -> Result<(), RelayError> {
        let name = required(req.name)?;
        let password = required(req.password)?;

        self.directory.create_room(RoomName::from(name), password)
    }

    pub fn join(&self, req: JoinRoomRequest) -> Result<(), RelayError> {
        let name = required(req.name)?;
        let password = required(req.password)?;
        let peer_id = required(req.peer_id)?;

        self.directory
            .join_room(&RoomName::from(name), &password, PeerId::from(peer_id))
    }

    pub fn leave(&self, req: LeaveRoomRequest) -> Result<(), RelayError> {
        let name = required(req.name)?;
        let peer_id = required(req.peer_id)?;

        match self
            .directory
            .leave_room(&RoomName::from(name), &PeerId::from(peer_id))?
        {
            true => Ok(()),
            false => Err(RelayError::NotInRoom),
        }
    }

    pub fn send(&self, req: SendRequest) -> Result<(), RelayError> {
        let name = required(req.name)?;
        let to = required(req.to)?;
        let message = req.message.ok_or(RelayError::MissingFields)?;
        let kind = message.kind.ok_or(RelayError::MissingFields)?;
        let from = required(message.from)?;

        self.directory.send(
            &RoomName::from(name),
            PeerId::from(from),
            &PeerId::from(to),
            kind,
            message.payload,
        )
    }

    /// Drain the caller's queue. Never fails: an unknown room or peer, or a
    /// request missing either field, simply has nothing pending.
    pub fn poll(&self, req: PollRequest) -> Vec<PeerMessage> {
        let (Ok(name), Ok(peer_id)) = (required(req.name), required(req.peer_id)) else {
            debug!("Poll without room or peer, returning nothing");
            return Vec::new();
        };

        self.directory
            .dequeue_all(&RoomName::from(name), &PeerId::from(peer_id))
    }
}

fn required(field: Option<String>) -> Result<String, RelayError> {
    field
        .filter(|value| !value.is_empty())
        .ok_or(RelayError::MissingFields)
}
