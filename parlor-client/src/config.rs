use crate::session::Role;
use parlor_core::{IceServerConfig, PeerId, RoomName};
use std::time::Duration;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Everything a peer needs to enter a room and negotiate a call.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub relay_url: String,
    pub room: RoomName,
    pub password: String,
    pub peer_id: PeerId,
    pub role: Role,
    pub poll_interval: Duration,
    pub ice_servers: Vec<IceServerConfig>,
}

impl SessionConfig {
    /// Random peer identity, one-second polling and the public STUN server.
    pub fn new(
        relay_url: impl Into<String>,
        room: impl Into<RoomName>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            relay_url: relay_url.into(),
            room: room.into(),
            password: password.into(),
            peer_id: PeerId::random(),
            role,
            poll_interval: DEFAULT_POLL_INTERVAL,
            ice_servers: vec![IceServerConfig::default()],
        }
    }
}
