use crate::error::RelayError;
use crate::room::{Room, timestamp_millis};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use parlor_core::{MessageKind, PeerId, PeerMessage, RoomName};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};

pub const DEFAULT_QUEUE_CAPACITY: usize = 256;

/// Read-only view of a live room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSnapshot {
    pub name: RoomName,
    pub peers: Vec<PeerId>,
}

struct DirectoryInner {
    rooms: DashMap<RoomName, Room>,
    queue_capacity: usize,
}

/// Every live room, keyed by name.
///
/// Each operation runs under the lock of the one room it touches, so
/// operations on the same room never interleave.
#[derive(Clone)]
pub struct RoomDirectory {
    inner: Arc<DirectoryInner>,
}

impl RoomDirectory {
    pub fn new(queue_capacity: usize) -> Self {
        Self {
            inner: Arc::new(DirectoryInner {
                rooms: DashMap::new(),
                queue_capacity,
            }),
        }
    }

    pub fn create_room(&self, name: RoomName, password: String) -> Result<(), RelayError> {
        match self.inner.rooms.entry(name) {
            Entry::Occupied(_) => Err(RelayError::RoomAlreadyExists),
            Entry::Vacant(slot) => {
                info!("Creating new room: {}", slot.key());
                let room = Room::new(
                    slot.key().clone(),
                    password,
                    self.inner.queue_capacity,
                    Instant::now(),
                );
                slot.insert(room);
                Ok(())
            }
        }
    }

    pub fn get_room(&self, name: &RoomName) -> Option<RoomSnapshot> {
        self.inner.rooms.get(name).map(|room| RoomSnapshot {
            name: room.name().clone(),
            peers: room.peer_ids(),
        })
    }

    pub fn contains_room(&self, name: &RoomName) -> bool {
        self.inner.rooms.contains_key(name)
    }

    pub fn room_count(&self) -> usize {
        self.inner.rooms.len()
    }

    pub fn join_room(
        &self,
        name: &RoomName,
        password: &str,
        peer_id: PeerId,
    ) -> Result<(), RelayError> {
        let mut room = self
            .inner
            .rooms
            .get_mut(name)
            .ok_or(RelayError::RoomNotFound)?;

        if !room.password_matches(password) {
            return Err(RelayError::InvalidPassword);
        }

        info!("Peer {} joined room '{}'", peer_id, name);
        room.admit(peer_id, Instant::now());
        Ok(())
    }

    /// Remove `peer_id` from the room, destroying the room if it was the last
    /// member. `Ok(false)` means the peer was not a member and nothing changed.
    pub fn leave_room(&self, name: &RoomName, peer_id: &PeerId) -> Result<bool, RelayError> {
        let mut outcome = Err(RelayError::RoomNotFound);

        let destroyed = self.inner.rooms.remove_if_mut(name, |_, room| {
            let removed = room.remove(peer_id);
            outcome = Ok(removed);
            removed && room.is_empty()
        });

        if let Ok(true) = outcome {
            info!("Peer {} left room '{}'", peer_id, name);
        }
        if destroyed.is_some() {
            info!("Room '{}' is empty, destroying it", name);
        }
        outcome
    }

    /// Append to the target's queue. Silently does nothing when the room or
    /// the target's queue does not exist.
    pub fn enqueue(&self, name: &RoomName, to: &PeerId, message: PeerMessage) {
        match self.inner.rooms.get_mut(name) {
            Some(mut room) => {
                room.enqueue(to, message);
            }
            None => debug!("Dropping {} for {}: no room '{}'", message.kind, to, name),
        }
    }

    /// Take every pending message for `peer_id`, oldest first. Unknown rooms
    /// and peers yield an empty list.
    pub fn dequeue_all(&self, name: &RoomName, peer_id: &PeerId) -> Vec<PeerMessage> {
        match self.inner.rooms.get_mut(name) {
            Some(mut room) => room.drain(peer_id, Instant::now()),
            None => Vec::new(),
        }
    }

    /// Membership-checked point-to-point delivery from `from` to `to`.
    pub fn send(
        &self,
        name: &RoomName,
        from: PeerId,
        to: &PeerId,
        kind: MessageKind,
        payload: Option<Value>,
    ) -> Result<(), RelayError> {
        let mut room = self
            .inner
            .rooms
            .get_mut(name)
            .ok_or(RelayError::RoomNotFound)?;

        if !room.is_member(&from) {
            return Err(RelayError::SenderNotInRoom);
        }
        if !room.is_member(to) {
            return Err(RelayError::TargetNotInRoom);
        }

        debug!("Relaying {} from {} to {} in room '{}'", kind, from, to, name);
        room.touch(&from, Instant::now());
        room.enqueue(
            to,
            PeerMessage {
                kind,
                from,
                to: None,
                payload,
                ts: timestamp_millis(),
            },
        );
        Ok(())
    }

    /// Remove every peer idle for at least `timeout` as if it had left, and
    /// destroy rooms left empty. A room nobody ever joined is destroyed once
    /// it is `timeout` old. Returns the expired `(room, peer)` pairs.
    pub fn expire_idle(&self, now: Instant, timeout: Duration) -> Vec<(RoomName, PeerId)> {
        let mut expired = Vec::new();

        self.inner.rooms.retain(|name, room| {
            let had_members = !room.is_empty();

            for peer_id in room.idle_peers(now, timeout) {
                room.remove(&peer_id);
                expired.push((name.clone(), peer_id));
            }

            if !room.is_empty() {
                return true;
            }

            let abandoned = now.saturating_duration_since(room.created_at()) >= timeout;
            if had_members || abandoned {
                info!("Room '{}' is empty, destroying it", name);
                return false;
            }
            true
        });

        expired
    }
}

impl Default for RoomDirectory {
    fn default() -> Self {
        Self::new(DEFAULT_QUEUE_CAPACITY)
    }
}
