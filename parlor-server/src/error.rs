//! Failure signals of the relay operations.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use parlor_core::{ErrorCode, RelayResponse};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayError {
    /// A required field is absent or empty
    #[error("missing required fields")]
    MissingFields,

    /// Body could not be parsed as the operation's JSON shape
    #[error("request body is not valid JSON for this operation")]
    InvalidJson,

    #[error("room already exists")]
    RoomAlreadyExists,

    #[error("room not found")]
    RoomNotFound,

    #[error("invalid room password")]
    InvalidPassword,

    #[error("peer is not in the room")]
    NotInRoom,

    #[error("sender is not in the room")]
    SenderNotInRoom,

    #[error("target is not in the room")]
    TargetNotInRoom,
}

impl RelayError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RelayError::MissingFields => ErrorCode::MissingFields,
            RelayError::InvalidJson => ErrorCode::InvalidJson,
            RelayError::RoomAlreadyExists => ErrorCode::RoomAlreadyExists,
            RelayError::RoomNotFound => ErrorCode::RoomNotFound,
            RelayError::InvalidPassword => ErrorCode::InvalidPassword,
            RelayError::NotInRoom => ErrorCode::NotInRoom,
            RelayError::SenderNotInRoom => ErrorCode::SenderNotInRoom,
            RelayError::TargetNotInRoom => ErrorCode::TargetNotInRoom,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MissingFields | RelayError::InvalidJson => StatusCode::BAD_REQUEST,
            RelayError::InvalidPassword | RelayError::NotInRoom | RelayError::SenderNotInRoom => {
                StatusCode::FORBIDDEN
            }
            RelayError::RoomNotFound | RelayError::TargetNotInRoom => StatusCode::NOT_FOUND,
            RelayError::RoomAlreadyExists => StatusCode::CONFLICT,
        }
    }
}

impl From<JsonRejection> for RelayError {
    fn from(_: JsonRejection) -> Self {
        RelayError::InvalidJson
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status(), Json(RelayResponse::error(self.code()))).into_response()
    }
}
