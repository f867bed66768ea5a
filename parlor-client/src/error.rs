use parlor_core::{ErrorCode, SignalError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("relay rejected the request: {0}")]
    Rejected(ErrorCode),

    #[error("relay request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("session backend failed: {0}")]
    Backend(anyhow::Error),

    #[error("undecodable signal: {0}")]
    Decode(#[from] SignalError),

    #[error("{0}")]
    Protocol(String),

    #[error("session has already ended")]
    SessionEnded,
}

impl ClientError {
    /// The relay's error code, if the relay answered with one.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            ClientError::Rejected(code) => Some(*code),
            _ => None,
        }
    }
}
