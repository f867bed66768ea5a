use std::time::Duration;

use parlor_server::{RelayConfig, RelayService, RoomDirectory, serve_with};
use tokio::net::TcpListener;

use crate::integration::init_tracing;

async fn serve_config(config: RelayConfig) -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind loopback");
    let service = RelayService::new(RoomDirectory::new(config.max_queue_len.max(1)));
    serve_with(listener, service, &config, std::future::pending::<()>()).await
}

#[tokio::test]
async fn test_zero_reap_interval_refuses_to_serve() {
    init_tracing();
    let config = RelayConfig {
        peer_idle_timeout: Some(Duration::from_secs(1)),
        reap_interval: Duration::ZERO,
        ..RelayConfig::default()
    };

    let result = tokio::time::timeout(Duration::from_secs(5), serve_config(config))
        .await
        .expect("serve_with kept running on an invalid config");
    let err = result.expect_err("zero reap interval accepted");
    assert!(format!("{:#}", err).contains("reap_interval"));
}

#[tokio::test]
async fn test_zero_queue_len_refuses_to_serve() {
    init_tracing();
    let config = RelayConfig {
        max_queue_len: 0,
        ..RelayConfig::default()
    };

    let result = tokio::time::timeout(Duration::from_secs(5), serve_config(config))
        .await
        .expect("serve_with kept running on an invalid config");
    assert!(result.is_err());
}
