use crate::error::ClientError;
use crate::session::{NegotiationState, SessionCommand};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;

/// Caller's side of a running session.
pub struct SessionHandle {
    command_tx: mpsc::Sender<SessionCommand>,
    state_rx: watch::Receiver<NegotiationState>,
    error_rx: mpsc::UnboundedReceiver<ClientError>,
    task: JoinHandle<()>,
}

impl SessionHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<SessionCommand>,
        state_rx: watch::Receiver<NegotiationState>,
        error_rx: mpsc::UnboundedReceiver<ClientError>,
        task: JoinHandle<()>,
    ) -> Self {
        Self {
            command_tx,
            state_rx,
            error_rx,
            task,
        }
    }

    pub fn state(&self) -> NegotiationState {
        *self.state_rx.borrow()
    }

    pub fn watch_state(&self) -> watch::Receiver<NegotiationState> {
        self.state_rx.clone()
    }

    /// Resolves once the session reaches `target`.
    pub async fn wait_for(&self, target: NegotiationState) -> Result<(), ClientError> {
        let mut state_rx = self.state_rx.clone();
        let reached = state_rx.wait_for(|state| *state == target).await.is_ok();
        if reached {
            Ok(())
        } else {
            Err(ClientError::SessionEnded)
        }
    }

    /// Offer again to the peer already in the room. Host only.
    pub async fn start_call(&self) -> Result<(), ClientError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.command_tx
            .send(SessionCommand::StartCall(reply_tx))
            .await
            .map_err(|_| ClientError::SessionEnded)?;
        reply_rx.await.map_err(|_| ClientError::SessionEnded)?
    }

    /// Next negotiation failure reported by the poll loop.
    pub async fn next_error(&mut self) -> Option<ClientError> {
        self.error_rx.recv().await
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop polling, hang up and leave the room.
    pub async fn leave(self) -> Result<(), ClientError> {
        // The loop may already have ended after the peer hung up.
        let _ = self.command_tx.send(SessionCommand::Leave).await;
        self.task
            .await
            .map_err(|e| ClientError::Protocol(format!("session task failed: {}", e)))
    }
}
