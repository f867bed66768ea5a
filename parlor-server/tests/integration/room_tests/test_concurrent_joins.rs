use futures::future::join_all;
use parlor_core::{MessageKind, RoomName};

use crate::integration::{create_test_relay, init_tracing};
use crate::utils::assert_ok;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_joins_are_all_admitted() {
    init_tracing();
    let (relay, client) = create_test_relay().await;

    client.create("lobby", "secret").await;

    let peers: Vec<String> = (0..16).map(|i| format!("peer-{i}")).collect();
    let joins = peers.iter().map(|peer| {
        let client = client.clone();
        async move { client.join("lobby", "secret", peer).await }
    });
    for result in join_all(joins).await {
        assert_ok(result);
    }

    let snapshot = relay
        .directory()
        .get_room(&RoomName::from("lobby"))
        .expect("Room should exist");
    assert_eq!(snapshot.peers.len(), peers.len());

    // Every member saw exactly one join per admitted peer, itself included,
    // since it was present for its own join and every later one.
    let mut total_joins = 0;
    for peer in &peers {
        let inbox = client.poll("lobby", peer).await;
        assert!(inbox.iter().all(|m| m.kind == MessageKind::Join));
        assert!(inbox.iter().any(|m| m.from.as_str() == peer));
        total_joins += inbox.len();
    }
    assert_eq!(total_joins, peers.len() * (peers.len() + 1) / 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_have_one_winner() {
    init_tracing();
    let (_relay, client) = create_test_relay().await;

    let creates = (0..8).map(|i| {
        let client = client.clone();
        async move { client.create("contested", &format!("pw-{i}")).await }
    });
    let winners = join_all(creates)
        .await
        .into_iter()
        .filter(|(status, _)| *status == 200)
        .count();

    assert_eq!(winners, 1);
}
