use parlor_core::PeerMessage;
use std::collections::VecDeque;
use tokio::time::Instant;

/// Ordered backlog of messages waiting for one peer's next poll.
#[derive(Debug)]
pub struct PeerQueue {
    messages: VecDeque<PeerMessage>,
    capacity: usize,
    dropped: u64,
    last_seen: Instant,
}

impl PeerQueue {
    pub fn new(capacity: usize, now: Instant) -> Self {
        Self {
            messages: VecDeque::new(),
            capacity: capacity.max(1),
            dropped: 0,
            last_seen: now,
        }
    }

    /// Append at the tail. When full, the oldest message is evicted and
    /// returned.
    pub fn push(&mut self, message: PeerMessage) -> Option<PeerMessage> {
        let evicted = if self.messages.len() >= self.capacity {
            self.dropped += 1;
            self.messages.pop_front()
        } else {
            None
        };
        self.messages.push_back(message);
        evicted
    }

    /// Take the whole backlog, oldest first, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<PeerMessage> {
        std::mem::take(&mut self.messages).into()
    }

    pub fn touch(&mut self, now: Instant) {
        self.last_seen = now;
    }

    pub fn last_seen(&self) -> Instant {
        self.last_seen
    }

    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}
