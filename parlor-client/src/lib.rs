//! Peer side of the parlor relay.
//!
//! A session enters a room over HTTP, polls its queue on a fixed interval and
//! drives the offer/answer handshake against a pluggable media backend.

pub mod config;
pub mod error;
pub mod rtc;
pub mod session;
pub mod transport;

pub use config::SessionConfig;
pub use error::ClientError;
pub use rtc::*;
pub use session::*;
pub use transport::*;
