use crate::model::peer::PeerId;
use crate::model::signal::{Signal, SignalError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Offer,
    Answer,
    Ice,
    Join,
    Leave,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Offer => "offer",
            MessageKind::Answer => "answer",
            MessageKind::Ice => "ice",
            MessageKind::Join => "join",
            MessageKind::Leave => "leave",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A handshake message sitting in (or just drained from) a peer's queue.
///
/// `ts` is stamped by the relay in milliseconds since the unix epoch and is
/// diagnostic only; delivery order is queue order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerMessage {
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub from: PeerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<PeerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    pub ts: u64,
}

impl PeerMessage {
    /// Presence notice (`join` / `leave`) broadcast to a whole room.
    pub fn presence(kind: MessageKind, from: PeerId, ts: u64) -> Self {
        Self {
            kind,
            from,
            to: None,
            payload: None,
            ts,
        }
    }

    /// Decode the opaque payload into the typed signal its `type` calls for.
    pub fn signal(&self) -> Result<Signal, SignalError> {
        Signal::decode(self.kind, self.payload.as_ref())
    }
}
