pub mod relay_client;

pub use relay_client::*;
pub use test_relay::*;
