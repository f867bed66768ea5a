use crate::room::PeerQueue;
use parlor_core::{MessageKind, PeerId, PeerMessage, RoomName};
use std::collections::HashMap;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::time::Instant;
use tracing::{debug, warn};

/// One live room: its credential and, per member, the queue of messages
/// addressed to that member.
///
/// Membership and queues are a single map, so a peer has a queue exactly
/// while it is a member.
#[derive(Debug)]
pub struct Room {
    name: RoomName,
    password: String,
    members: HashMap<PeerId, PeerQueue>,
    queue_capacity: usize,
    created_at: Instant,
}

impl Room {
    pub fn new(name: RoomName, password: String, queue_capacity: usize, now: Instant) -> Self {
        Self {
            name,
            password,
            members: HashMap::new(),
            queue_capacity,
            created_at: now,
        }
    }

    pub fn name(&self) -> &RoomName {
        &self.name
    }

    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    pub fn is_member(&self, peer_id: &PeerId) -> bool {
        self.members.contains_key(peer_id)
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    pub fn peer_ids(&self) -> Vec<PeerId> {
        let mut peers: Vec<PeerId> = self.members.keys().cloned().collect();
        peers.sort();
        peers
    }

    /// Add `peer_id` (keeping its queue if it is already a member) and
    /// announce it to every member, itself included.
    pub fn admit(&mut self, peer_id: PeerId, now: Instant) {
        let capacity = self.queue_capacity;
        self.members
            .entry(peer_id.clone())
            .or_insert_with(|| PeerQueue::new(capacity, now))
            .touch(now);

        self.broadcast(PeerMessage::presence(
            MessageKind::Join,
            peer_id,
            timestamp_millis(),
        ));
    }

    /// Drop `peer_id` and its queue and announce the departure to the rest.
    /// Returns `false` if it was not a member.
    pub fn remove(&mut self, peer_id: &PeerId) -> bool {
        if self.members.remove(peer_id).is_none() {
            return false;
        }

        self.broadcast(PeerMessage::presence(
            MessageKind::Leave,
            peer_id.clone(),
            timestamp_millis(),
        ));
        true
    }

    pub fn broadcast(&mut self, message: PeerMessage) {
        for (peer_id, queue) in self.members.iter_mut() {
            if queue.push(message.clone()).is_some() {
                warn!(
                    "Queue of {} in room '{}' is full, dropped oldest message ({} dropped so far)",
                    peer_id,
                    self.name,
                    queue.dropped()
                );
            }
        }
    }

    /// Append `message` to the target's queue, stamping target and time.
    /// Does nothing if the target has no queue here.
    pub fn enqueue(&mut self, to: &PeerId, mut message: PeerMessage) -> bool {
        let Some(queue) = self.members.get_mut(to) else {
            debug!("Dropping {} for {}: not in room '{}'", message.kind, to, self.name);
            return false;
        };

        message.to = Some(to.clone());
        message.ts = timestamp_millis();

        if queue.push(message).is_some() {
            warn!(
                "Queue of {} in room '{}' is full, dropped oldest message ({} dropped so far)",
                to,
                self.name,
                queue.dropped()
            );
        }
        true
    }

    pub fn drain(&mut self, peer_id: &PeerId, now: Instant) -> Vec<PeerMessage> {
        match self.members.get_mut(peer_id) {
            Some(queue) => {
                queue.touch(now);
                queue.drain()
            }
            None => Vec::new(),
        }
    }

    pub fn touch(&mut self, peer_id: &PeerId, now: Instant) {
        if let Some(queue) = self.members.get_mut(peer_id) {
            queue.touch(now);
        }
    }

    pub fn idle_peers(&self, now: Instant, timeout: Duration) -> Vec<PeerId> {
        self.members
            .iter()
            .filter(|(_, queue)| now.saturating_duration_since(queue.last_seen()) >= timeout)
            .map(|(peer_id, _)| peer_id.clone())
            .collect()
    }
}

/// Milliseconds since the unix epoch, for `PeerMessage::ts`.
pub fn timestamp_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
