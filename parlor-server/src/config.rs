use anyhow::{Result, bail};
use std::net::SocketAddr;
use std::time::Duration;

/// Runtime settings of the relay.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub bind_addr: SocketAddr,
    /// Pending messages kept per peer; the oldest is dropped past this.
    pub max_queue_len: usize,
    /// A peer that has not polled, sent or joined for this long is removed
    /// as if it had left. `None` keeps stale peers until they leave.
    pub peer_idle_timeout: Option<Duration>,
    pub reap_interval: Duration,
}

impl RelayConfig {
    /// Reject settings the relay cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.max_queue_len == 0 {
            bail!("max_queue_len must be at least 1");
        }
        if let Some(timeout) = self.peer_idle_timeout {
            if timeout.is_zero() {
                bail!("peer_idle_timeout must be non-zero; use None to disable expiry");
            }
            if self.reap_interval.is_zero() {
                bail!("reap_interval must be non-zero while peer expiry is enabled");
            }
        }
        Ok(())
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            max_queue_len: 256,
            peer_idle_timeout: Some(Duration::from_secs(30)),
            reap_interval: Duration::from_secs(5),
        }
    }
}
