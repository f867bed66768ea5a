//! Wire model shared by the parlor relay and its clients.
//!
//! Everything here is plain data: identifiers, the queued [`PeerMessage`],
//! the typed [`Signal`] a client decodes it into, and the JSON bodies of the
//! relay's HTTP operations.

pub mod model;

pub use model::*;
