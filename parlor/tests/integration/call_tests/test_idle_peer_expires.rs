use std::time::Duration;

use parlor_client::{HttpRelay, RelayTransport, Role};
use parlor_core::{MessageKind, PeerId, RoomName};
use parlor_server::RelayConfig;

use crate::integration::{WAIT, init_tracing};
use crate::utils::TestRelay;

#[tokio::test]
async fn test_silent_peer_is_expired_with_leave() {
    init_tracing();
    let config = RelayConfig {
        peer_idle_timeout: Some(Duration::from_millis(300)),
        reap_interval: Duration::from_millis(50),
        ..RelayConfig::default()
    };
    let relay = TestRelay::spawn(config).await.expect("Failed to spawn relay");
    let room = RoomName::from("r1");

    let silent = HttpRelay::new(relay.url(), room.clone(), PeerId::from("silent"));
    silent.enter("pw", Role::Host).await.expect("enter");
    let active = HttpRelay::new(relay.url(), room, PeerId::from("active"));
    active.enter("pw", Role::Guest).await.expect("enter");

    let deadline = tokio::time::Instant::now() + WAIT;
    loop {
        let messages = active.poll().await.expect("poll");
        if messages
            .iter()
            .any(|m| m.kind == MessageKind::Leave && m.from == PeerId::from("silent"))
        {
            break;
        }
        assert!(
            tokio::time::Instant::now() < deadline,
            "Silent peer was never expired"
        );
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    // The active peer kept polling and is still a member.
    active
        .leave()
        .await
        .expect("Active peer should still be in the room");
}
