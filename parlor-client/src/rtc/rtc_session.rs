use crate::session::SessionBackend;
use anyhow::{Context, Result};
use async_trait::async_trait;
use parlor_core::{IceCandidate, IceServerConfig, SdpType, SessionDescription};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};
use webrtc::api::APIBuilder;
use webrtc::api::interceptor_registry::register_default_interceptors;
use webrtc::api::media_engine::MediaEngine;
use webrtc::ice_transport::ice_candidate::{RTCIceCandidate, RTCIceCandidateInit};
use webrtc::ice_transport::ice_server::RTCIceServer;
use webrtc::interceptor::registry::Registry;
use webrtc::peer_connection::RTCPeerConnection;
use webrtc::peer_connection::configuration::RTCConfiguration;
use webrtc::peer_connection::peer_connection_state::RTCPeerConnectionState;
use webrtc::peer_connection::sdp::session_description::RTCSessionDescription;
use webrtc::rtp_transceiver::rtp_codec::RTPCodecType;

/// [`SessionBackend`] on a native `webrtc` peer connection with one audio and
/// one video transceiver. Media capture is left to the embedding application.
pub struct RtcSession {
    peer_connection: Arc<RTCPeerConnection>,
}

impl RtcSession {
    /// Build the peer connection. Locally gathered candidates are delivered
    /// on the returned channel for trickling to the remote peer.
    pub async fn new(
        ice_servers: &[IceServerConfig],
    ) -> Result<(Self, mpsc::UnboundedReceiver<IceCandidate>)> {
        let mut media_engine = MediaEngine::default();
        media_engine.register_default_codecs()?;
        let registry = register_default_interceptors(Registry::new(), &mut media_engine)?;

        let api = APIBuilder::new()
            .with_media_engine(media_engine)
            .with_interceptor_registry(registry)
            .build();

        let rtc_config = RTCConfiguration {
            ice_servers: ice_servers.iter().map(to_rtc_ice_server).collect(),
            ..Default::default()
        };
        let peer_connection = Arc::new(
            api.new_peer_connection(rtc_config)
                .await
                .context("Failed to create peer connection")?,
        );

        peer_connection.on_peer_connection_state_change(Box::new(
            move |state: RTCPeerConnectionState| {
                Box::pin(async move {
                    info!("Peer connection state: {:?}", state);
                })
            },
        ));

        let (candidate_tx, candidate_rx) = mpsc::unbounded_channel();
        peer_connection.on_ice_candidate(Box::new(move |c: Option<RTCIceCandidate>| {
            let tx = candidate_tx.clone();
            Box::pin(async move {
                let Some(candidate) = c else { return };
                let Ok(init) = candidate.to_json() else {
                    return;
                };
                debug!("Local candidate gathered: {}", init.candidate);
                let _ = tx.send(from_rtc_candidate(init));
            })
        }));

        Ok((Self { peer_connection }, candidate_rx))
    }

    async fn ensure_transceivers(&self) -> Result<()> {
        if !self.peer_connection.get_transceivers().await.is_empty() {
            return Ok(());
        }
        for kind in [RTPCodecType::Audio, RTPCodecType::Video] {
            self.peer_connection
                .add_transceiver_from_kind(kind, None)
                .await
                .with_context(|| format!("Failed to add {:?} transceiver", kind))?;
        }
        Ok(())
    }
}

#[async_trait]
impl SessionBackend for RtcSession {
    async fn create_offer(&self) -> Result<SessionDescription> {
        self.ensure_transceivers().await?;

        let offer = self
            .peer_connection
            .create_offer(None)
            .await
            .context("Failed to create offer")?;
        self.peer_connection
            .set_local_description(offer.clone())
            .await
            .context("Failed to set local description")?;

        Ok(SessionDescription::offer(offer.sdp))
    }

    async fn accept_offer(&self, offer: SessionDescription) -> Result<SessionDescription> {
        let remote = RTCSessionDescription::offer(offer.sdp)?;
        self.peer_connection
            .set_remote_description(remote)
            .await
            .context("Failed to set remote offer")?;

        let answer = self
            .peer_connection
            .create_answer(None)
            .await
            .context("Failed to create answer")?;
        self.peer_connection
            .set_local_description(answer.clone())
            .await
            .context("Failed to set local description")?;

        Ok(SessionDescription::answer(answer.sdp))
    }

    async fn apply_answer(&self, answer: SessionDescription) -> Result<()> {
        if answer.sdp_type != SdpType::Answer {
            anyhow::bail!("Expected an answer, got {:?}", answer.sdp_type);
        }
        let remote = RTCSessionDescription::answer(answer.sdp)?;
        self.peer_connection
            .set_remote_description(remote)
            .await
            .context("Failed to set remote answer")?;
        Ok(())
    }

    async fn add_ice_candidate(&self, candidate: IceCandidate) -> Result<()> {
        self.peer_connection
            .add_ice_candidate(to_rtc_candidate(candidate))
            .await
            .context("Failed to add ICE candidate")?;
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        self.peer_connection
            .close()
            .await
            .context("Failed to close peer connection")?;
        Ok(())
    }
}

fn to_rtc_ice_server(server: &IceServerConfig) -> RTCIceServer {
    RTCIceServer {
        urls: server.urls.clone(),
        username: server.username.clone().unwrap_or_default(),
        credential: server.credential.clone().unwrap_or_default(),
        ..Default::default()
    }
}

fn to_rtc_candidate(candidate: IceCandidate) -> RTCIceCandidateInit {
    RTCIceCandidateInit {
        candidate: candidate.candidate,
        sdp_mid: candidate.sdp_mid,
        sdp_mline_index: candidate.sdp_m_line_index,
        username_fragment: candidate.username_fragment,
    }
}

fn from_rtc_candidate(init: RTCIceCandidateInit) -> IceCandidate {
    IceCandidate {
        candidate: init.candidate,
        sdp_mid: init.sdp_mid,
        sdp_m_line_index: init.sdp_mline_index,
        username_fragment: init.username_fragment,
    }
}
