use parlor_client::{NegotiationState, Role};
use parlor_server::RelayService;

use crate::integration::{init_tracing, spawn_peer, wait_for_state};

#[tokio::test]
async fn test_failed_polls_are_retried_on_schedule() {
    init_tracing();
    let service = RelayService::default();

    let host = spawn_peer(&service, "lobby", "host", Role::Host);
    host.relay.fail_next_polls(5);
    let guest = spawn_peer(&service, "lobby", "guest", Role::Guest);
    guest.relay.fail_next_polls(3);

    wait_for_state(&host, NegotiationState::Connected).await;
    wait_for_state(&guest, NegotiationState::Connected).await;
}
