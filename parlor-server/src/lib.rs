//! Room directory and signaling relay.
//!
//! Peers create or join a password-protected room, then exchange handshake
//! messages through per-peer queues that they drain by polling. All state is
//! in memory and lives as long as the process does.

pub mod config;
pub mod error;
pub mod room;
pub mod signaling;

pub use config::RelayConfig;
pub use error::RelayError;
pub use room::*;
pub use signaling::*;
