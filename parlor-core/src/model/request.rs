//! JSON bodies of the relay's HTTP operations.
//!
//! Request fields are optional on purpose: a body that parses but lacks a
//! field is a `MISSING_FIELDS` rejection, not a parse failure.

use crate::model::error_code::ErrorCode;
use crate::model::message::{MessageKind, PeerMessage};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl CreateRoomRequest {
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            password: Some(password.into()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRoomRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peer_id: Option<String>,
}

impl JoinRoomRequest {
    pub fn new(
        name: impl Into<String>,
        password: impl Into<String>,
        peer_id: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            password: Some(password.into()),
            peer_id: Some(peer_id.into()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRoomRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peer_id: Option<String>,
}

impl LeaveRoomRequest {
    pub fn new(name: impl Into<String>, peer_id: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            peer_id: Some(peer_id.into()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peer_id: Option<String>,
}

impl PollRequest {
    pub fn new(name: impl Into<String>, peer_id: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            peer_id: Some(peer_id.into()),
        }
    }
}

/// Message as submitted by a sender. `to` and `ts` are assigned by the relay,
/// so any values the client puts there are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageDraft {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<MessageKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SendRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<MessageDraft>,
}

impl SendRequest {
    pub fn new(
        name: impl Into<String>,
        to: impl Into<String>,
        kind: MessageKind,
        from: impl Into<String>,
        payload: Option<Value>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            to: Some(to.into()),
            message: Some(MessageDraft {
                kind: Some(kind),
                from: Some(from.into()),
                payload,
            }),
        }
    }
}

/// `{ ok, error?, messages? }` returned by every relay operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelayResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<PeerMessage>>,
}

impl RelayResponse {
    pub fn ok() -> Self {
        Self {
            ok: true,
            ..Default::default()
        }
    }

    pub fn error(code: ErrorCode) -> Self {
        Self {
            ok: false,
            error: Some(code),
            messages: None,
        }
    }

    pub fn with_messages(messages: Vec<PeerMessage>) -> Self {
        Self {
            ok: true,
            error: None,
            messages: Some(messages),
        }
    }
}
