mod http_relay;
mod relay_transport;

pub use http_relay::*;
pub use relay_transport::*;
