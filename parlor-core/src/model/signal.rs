use crate::model::message::MessageKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SdpType {
    Offer,
    Answer,
    Pranswer,
    Rollback,
}

/// Session description in the shape browsers serialize it: `{type, sdp}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDescription {
    #[serde(rename = "type")]
    pub sdp_type: SdpType,
    pub sdp: String,
}

impl SessionDescription {
    pub fn offer(sdp: impl Into<String>) -> Self {
        Self {
            sdp_type: SdpType::Offer,
            sdp: sdp.into(),
        }
    }

    pub fn answer(sdp: impl Into<String>) -> Self {
        Self {
            sdp_type: SdpType::Answer,
            sdp: sdp.into(),
        }
    }
}

/// Connectivity candidate, matching `RTCIceCandidateInit` JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IceCandidate {
    pub candidate: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdp_mid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdp_m_line_index: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username_fragment: Option<String>,
}

#[derive(Debug, Error)]
pub enum SignalError {
    #[error("{0} message carries no payload")]
    MissingPayload(MessageKind),

    #[error("{kind} payload is malformed: {source}")]
    InvalidPayload {
        kind: MessageKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("{kind} message carries a {found:?} session description")]
    UnexpectedSdpType { kind: MessageKind, found: SdpType },
}

/// Closed set of handshake signals a negotiating peer reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    Offer(SessionDescription),
    Answer(SessionDescription),
    Ice(IceCandidate),
    Join,
    Leave,
}

impl Signal {
    pub fn decode(kind: MessageKind, payload: Option<&Value>) -> Result<Self, SignalError> {
        match kind {
            MessageKind::Join => Ok(Signal::Join),
            MessageKind::Leave => Ok(Signal::Leave),
            MessageKind::Offer => {
                let desc = description(kind, payload, SdpType::Offer)?;
                Ok(Signal::Offer(desc))
            }
            MessageKind::Answer => {
                let desc = description(kind, payload, SdpType::Answer)?;
                Ok(Signal::Answer(desc))
            }
            MessageKind::Ice => {
                let value = payload.ok_or(SignalError::MissingPayload(kind))?;
                let candidate = IceCandidate::deserialize(value)
                    .map_err(|source| SignalError::InvalidPayload { kind, source })?;
                Ok(Signal::Ice(candidate))
            }
        }
    }

    /// Payload to put on the wire for this signal, if any.
    pub fn payload(&self) -> Option<Value> {
        let value = match self {
            Signal::Offer(desc) | Signal::Answer(desc) => serde_json::to_value(desc),
            Signal::Ice(candidate) => serde_json::to_value(candidate),
            Signal::Join | Signal::Leave => return None,
        };
        value.ok()
    }
}

fn description(
    kind: MessageKind,
    payload: Option<&Value>,
    expected: SdpType,
) -> Result<SessionDescription, SignalError> {
    let value = payload.ok_or(SignalError::MissingPayload(kind))?;
    let desc = SessionDescription::deserialize(value)
        .map_err(|source| SignalError::InvalidPayload { kind, source })?;
    if desc.sdp_type != expected {
        return Err(SignalError::UnexpectedSdpType {
            kind,
            found: desc.sdp_type,
        });
    }
    Ok(desc)
}
