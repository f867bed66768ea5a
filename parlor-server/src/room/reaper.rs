use crate::room::RoomDirectory;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{info, warn};

/// Shortest sweep period; a shorter `every` is raised to this.
pub const MIN_REAP_INTERVAL: Duration = Duration::from_millis(10);

/// Periodically expire peers that stopped polling.
///
/// The task runs until the returned handle is aborted.
pub fn spawn_reaper(
    directory: RoomDirectory,
    idle_timeout: Duration,
    every: Duration,
) -> JoinHandle<()> {
    let every = if every < MIN_REAP_INTERVAL {
        warn!(
            "Reap interval {:?} is too short, sweeping every {:?}",
            every, MIN_REAP_INTERVAL
        );
        MIN_REAP_INTERVAL
    } else {
        every
    };

    tokio::spawn(async move {
        info!(
            "Idle reaper started (timeout {:?}, sweep every {:?})",
            idle_timeout, every
        );

        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            for (room, peer_id) in directory.expire_idle(Instant::now(), idle_timeout) {
                warn!(
                    "Peer {} in room '{}' expired after {:?} without activity",
                    peer_id, room, idle_timeout
                );
            }
        }
    })
}
