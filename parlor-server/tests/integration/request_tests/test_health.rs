use crate::integration::{create_test_relay, init_tracing};

#[tokio::test]
async fn test_health_endpoint() {
    init_tracing();
    let (relay, _client) = create_test_relay().await;

    let body = reqwest::get(format!("{}/health", relay.base_url()))
        .await
        .expect("Health request failed")
        .text()
        .await
        .expect("Health body unreadable");
    assert_eq!(body, "ok");
}
