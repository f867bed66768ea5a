use parlor_core::{ErrorCode, MessageKind, PeerId, RoomName};

use crate::integration::{create_test_relay, init_tracing};
use crate::utils::{assert_ok, assert_rejected};

#[tokio::test]
async fn test_leave_notifies_remaining_peers() {
    init_tracing();
    let (relay, client) = create_test_relay().await;

    client.create("lobby", "secret").await;
    client.join("lobby", "secret", "A").await;
    client.join("lobby", "secret", "B").await;
    client.poll("lobby", "A").await;

    assert_ok(client.leave("lobby", "B").await);

    let inbox = client.poll("lobby", "A").await;
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].kind, MessageKind::Leave);
    assert_eq!(inbox[0].from, PeerId::from("B"));
    assert!(relay.directory().contains_room(&RoomName::from("lobby")));
}

#[tokio::test]
async fn test_last_leave_destroys_room() {
    init_tracing();
    let (relay, client) = create_test_relay().await;

    client.create("lobby", "secret").await;
    client.join("lobby", "secret", "A").await;
    assert_ok(client.leave("lobby", "A").await);

    assert!(!relay.directory().contains_room(&RoomName::from("lobby")));
    assert_rejected(
        client.join("lobby", "secret", "A").await,
        404,
        ErrorCode::RoomNotFound,
    );

    // The name is free again.
    assert_ok(client.create("lobby", "fresh").await);
}

#[tokio::test]
async fn test_leave_errors() {
    init_tracing();
    let (_relay, client) = create_test_relay().await;

    assert_rejected(client.leave("nowhere", "A").await, 404, ErrorCode::RoomNotFound);

    client.create("lobby", "secret").await;
    client.join("lobby", "secret", "A").await;
    assert_rejected(client.leave("lobby", "Z").await, 403, ErrorCode::NotInRoom);
}
