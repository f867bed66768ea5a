pub use parlor_core::{PeerId, RoomName};

pub mod model {
    pub use parlor_core::*;
}

#[cfg(feature = "server")]
pub mod server {
    pub use parlor_server::*;
}

#[cfg(feature = "client")]
pub mod client {
    pub use parlor_client::*;
}
