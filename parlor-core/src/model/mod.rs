mod error_code;
mod ice_server;
mod message;
mod peer;
mod request;
mod room;
mod signal;

pub use error_code::ErrorCode;
pub use ice_server::{DEFAULT_STUN_URL, IceServerConfig};
pub use message::{MessageKind, PeerMessage};
pub use peer::PeerId;
pub use request::{
    CreateRoomRequest, JoinRoomRequest, LeaveRoomRequest, MessageDraft, PollRequest,
    RelayResponse, SendRequest,
};
pub use room::RoomName;
pub use signal::{IceCandidate, SdpType, SessionDescription, Signal, SignalError};
