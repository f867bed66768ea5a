use crate::error::ClientError;
use crate::session::{Negotiator, Role, SessionBackend, SessionHandle};
use crate::transport::RelayTransport;
use parlor_core::IceCandidate;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{self, Instant};
use tracing::{debug, info, warn};

pub(crate) enum SessionCommand {
    StartCall(oneshot::Sender<Result<(), ClientError>>),
    Leave,
}

/// Poll loop actor. Owns the [`Negotiator`] and is the only task that talks
/// to the relay on the session's behalf.
pub struct SessionDriver {
    negotiator: Negotiator,
    relay: Arc<dyn RelayTransport>,
    command_rx: mpsc::Receiver<SessionCommand>,
    candidate_rx: mpsc::UnboundedReceiver<IceCandidate>,
    error_tx: mpsc::UnboundedSender<ClientError>,
    poll_interval: Duration,
}

impl SessionDriver {
    /// Start the loop for a peer that has already joined its room.
    /// `candidate_rx` carries candidates discovered by `backend`.
    pub fn spawn(
        role: Role,
        relay: Arc<dyn RelayTransport>,
        backend: Arc<dyn SessionBackend>,
        candidate_rx: mpsc::UnboundedReceiver<IceCandidate>,
        poll_interval: Duration,
    ) -> SessionHandle {
        let (command_tx, command_rx) = mpsc::channel(16);
        let (error_tx, error_rx) = mpsc::unbounded_channel();

        let negotiator = Negotiator::new(role, backend, Arc::clone(&relay));
        let state_rx = negotiator.subscribe();

        let driver = Self {
            negotiator,
            relay,
            command_rx,
            candidate_rx,
            error_tx,
            poll_interval,
        };
        let task = tokio::spawn(driver.run());

        SessionHandle::new(command_tx, state_rx, error_rx, task)
    }

    async fn run(mut self) {
        info!(
            "Session for {} started as {}",
            self.relay.peer_id(),
            self.negotiator.role()
        );

        let next_poll = time::sleep(Duration::ZERO);
        tokio::pin!(next_poll);

        loop {
            tokio::select! {
                command = self.command_rx.recv() => match command {
                    Some(SessionCommand::StartCall(reply)) => {
                        let result = self.negotiator.start_call().await;
                        let _ = reply.send(result);
                    }
                    Some(SessionCommand::Leave) | None => {
                        self.leave().await;
                        break;
                    }
                },

                Some(candidate) = self.candidate_rx.recv() => {
                    self.negotiator.local_candidate(candidate).await;
                }

                () = &mut next_poll => {
                    self.poll_once().await;
                    if self.negotiator.state().is_closed() {
                        self.leave().await;
                        break;
                    }
                    next_poll.as_mut().reset(Instant::now() + self.poll_interval);
                }
            }
        }

        info!("Session for {} ended", self.relay.peer_id());
    }

    async fn poll_once(&mut self) {
        let messages = match self.relay.poll().await {
            Ok(messages) => messages,
            Err(e) => {
                warn!("Poll failed, retrying next tick: {}", e);
                return;
            }
        };

        if !messages.is_empty() {
            debug!("Polled {} message(s)", messages.len());
        }
        for message in messages {
            if let Err(e) = self.negotiator.handle(message).await {
                warn!("Negotiation step failed: {}", e);
                let _ = self.error_tx.send(e);
            }
        }
    }

    async fn leave(&mut self) {
        self.negotiator.close().await;
        if let Err(e) = self.relay.leave().await {
            warn!("Failed to leave room: {}", e);
        }
    }
}
