use parlor_core::ErrorCode;
use serde_json::json;

use crate::integration::{create_test_relay, init_tracing};
use crate::utils::assert_rejected;

#[tokio::test]
async fn test_missing_fields_on_every_operation() {
    init_tracing();
    let (relay, client) = create_test_relay().await;

    let cases = [
        ("/api/rooms/create", json!({"name": "R"})),
        ("/api/rooms/create", json!({"name": "", "password": "pw"})),
        ("/api/rooms/join", json!({"name": "R", "password": "pw"})),
        ("/api/rooms/leave", json!({"peerId": "A"})),
        ("/api/rooms/send", json!({"to": "B", "message": {"type": "offer", "from": "A"}})),
    ];
    for (path, body) in cases {
        assert_rejected(client.post(path, &body).await, 400, ErrorCode::MissingFields);
    }

    assert_eq!(relay.directory().room_count(), 0);
}

#[tokio::test]
async fn test_missing_fields_checked_before_room_lookup() {
    init_tracing();
    let (_relay, client) = create_test_relay().await;

    // The room does not exist, but the incomplete request is reported first.
    assert_rejected(
        client
            .post("/api/rooms/join", &json!({"name": "nowhere", "peerId": "A"}))
            .await,
        400,
        ErrorCode::MissingFields,
    );
}
