use anyhow::Result;
use async_trait::async_trait;
use parlor_client::SessionBackend;
use parlor_core::{IceCandidate, SessionDescription};
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::mpsc;

/// Backend that fabricates descriptions and emits one local candidate per
/// description it installs, recording everything it is asked to do.
pub struct MockBackend {
    name: &'static str,
    candidate_tx: mpsc::UnboundedSender<IceCandidate>,
    offers_created: AtomicUsize,
    offers_accepted: AtomicUsize,
    answers_applied: AtomicUsize,
    closed: AtomicUsize,
    remote_candidates: Mutex<Vec<IceCandidate>>,
}

impl MockBackend {
    pub fn new(name: &'static str) -> (Arc<Self>, mpsc::UnboundedReceiver<IceCandidate>) {
        let (candidate_tx, candidate_rx) = mpsc::unbounded_channel();
        let backend = Arc::new(Self {
            name,
            candidate_tx,
            offers_created: AtomicUsize::new(0),
            offers_accepted: AtomicUsize::new(0),
            answers_applied: AtomicUsize::new(0),
            closed: AtomicUsize::new(0),
            remote_candidates: Mutex::new(Vec::new()),
        });
        (backend, candidate_rx)
    }

    pub fn offers_created(&self) -> usize {
        self.offers_created.load(Ordering::SeqCst)
    }

    pub fn offers_accepted(&self) -> usize {
        self.offers_accepted.load(Ordering::SeqCst)
    }

    pub fn answers_applied(&self) -> usize {
        self.answers_applied.load(Ordering::SeqCst)
    }

    pub fn close_count(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }

    pub fn remote_candidates(&self) -> Vec<IceCandidate> {
        self.remote_candidates.lock().unwrap().clone()
    }

    fn gather(&self, n: usize) {
        let _ = self.candidate_tx.send(IceCandidate {
            candidate: format!("candidate:{} {}", self.name, n),
            sdp_mid: Some("0".into()),
            sdp_m_line_index: Some(0),
            username_fragment: None,
        });
    }
}

#[async_trait]
impl SessionBackend for MockBackend {
    async fn create_offer(&self) -> Result<SessionDescription> {
        let n = self.offers_created.fetch_add(1, Ordering::SeqCst);
        tracing::debug!("[MockBackend {}] create_offer #{}", self.name, n);
        self.gather(n);
        Ok(SessionDescription::offer(format!("v=0 {} offer {}", self.name, n)))
    }

    async fn accept_offer(&self, offer: SessionDescription) -> Result<SessionDescription> {
        let n = self.offers_accepted.fetch_add(1, Ordering::SeqCst);
        tracing::debug!("[MockBackend {}] accept_offer: {}", self.name, offer.sdp);
        self.gather(n);
        Ok(SessionDescription::answer(format!("v=0 {} answer {}", self.name, n)))
    }

    async fn apply_answer(&self, _answer: SessionDescription) -> Result<()> {
        self.answers_applied.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn add_ice_candidate(&self, candidate: IceCandidate) -> Result<()> {
        self.remote_candidates.lock().unwrap().push(candidate);
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        self.closed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
