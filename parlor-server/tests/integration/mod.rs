pub mod config_tests;
pub mod request_tests;

use tracing::Level;

use crate::utils::{RelayClient, TestRelay};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Spawn a relay and hand back a client pointed at it.
pub async fn create_test_relay() -> (TestRelay, RelayClient) {
    let relay = TestRelay::spawn()
        .await
        .expect("Failed to spawn test relay");
    let client = RelayClient::new(relay.base_url());
    (relay, client)
}
