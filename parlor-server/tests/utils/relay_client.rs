use parlor_core::{
    CreateRoomRequest, ErrorCode, JoinRoomRequest, LeaveRoomRequest, MessageKind, PeerMessage,
    PollRequest, RelayResponse, SendRequest,
};
use serde::Serialize;
use serde_json::Value;

/// Thin reqwest wrapper that returns the status code alongside the body, so
/// tests can assert on both.
#[derive(Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    base_url: String,
}

impl RelayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> (u16, RelayResponse) {
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await
            .expect("Relay request failed");
        let status = resp.status().as_u16();
        let body = resp
            .json::<RelayResponse>()
            .await
            .expect("Relay returned a non-JSON body");
        (status, body)
    }

    pub async fn post_raw(&self, path: &str, body: &'static str) -> (u16, RelayResponse) {
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Relay request failed");
        let status = resp.status().as_u16();
        let body = resp
            .json::<RelayResponse>()
            .await
            .expect("Relay returned a non-JSON body");
        (status, body)
    }

    pub async fn create(&self, name: &str, password: &str) -> (u16, RelayResponse) {
        self.post("/api/rooms/create", &CreateRoomRequest::new(name, password))
            .await
    }

    pub async fn join(&self, name: &str, password: &str, peer_id: &str) -> (u16, RelayResponse) {
        self.post(
            "/api/rooms/join",
            &JoinRoomRequest::new(name, password, peer_id),
        )
        .await
    }

    pub async fn leave(&self, name: &str, peer_id: &str) -> (u16, RelayResponse) {
        self.post("/api/rooms/leave", &LeaveRoomRequest::new(name, peer_id))
            .await
    }

    pub async fn send(
        &self,
        name: &str,
        to: &str,
        kind: MessageKind,
        from: &str,
        payload: Option<Value>,
    ) -> (u16, RelayResponse) {
        self.post(
            "/api/rooms/send",
            &SendRequest::new(name, to, kind, from, payload),
        )
        .await
    }

    pub async fn poll(&self, name: &str, peer_id: &str) -> Vec<PeerMessage> {
        let (status, body) = self
            .post("/api/rooms/poll", &PollRequest::new(name, peer_id))
            .await;
        assert_eq!(status, 200, "poll must always succeed");
        assert!(body.ok);
        body.messages.unwrap_or_default()
    }
}

pub fn assert_ok((status, body): (u16, RelayResponse)) {
    assert_eq!(status, 200, "unexpected status, body: {:?}", body);
    assert!(body.ok);
    assert!(body.error.is_none());
}

pub fn assert_rejected((status, body): (u16, RelayResponse), expected_status: u16, code: ErrorCode) {
    assert_eq!(status, expected_status, "unexpected status, body: {:?}", body);
    assert!(!body.ok);
    assert_eq!(body.error, Some(code));
}
