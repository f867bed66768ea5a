use serde::{Deserialize, Serialize};
use std::fmt;

/// Failure signal carried in the `error` field of a relay response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    MissingFields,
    InvalidJson,
    RoomAlreadyExists,
    RoomNotFound,
    InvalidPassword,
    NotInRoom,
    SenderNotInRoom,
    TargetNotInRoom,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MissingFields => "MISSING_FIELDS",
            ErrorCode::InvalidJson => "INVALID_JSON",
            ErrorCode::RoomAlreadyExists => "ROOM_ALREADY_EXISTS",
            ErrorCode::RoomNotFound => "ROOM_NOT_FOUND",
            ErrorCode::InvalidPassword => "INVALID_PASSWORD",
            ErrorCode::NotInRoom => "NOT_IN_ROOM",
            ErrorCode::SenderNotInRoom => "SENDER_NOT_IN_ROOM",
            ErrorCode::TargetNotInRoom => "TARGET_NOT_IN_ROOM",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
