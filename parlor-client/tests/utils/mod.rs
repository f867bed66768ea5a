pub mod local_relay;
pub mod mock_backend;

pub use local_relay::*;
pub use mock_backend::*;
