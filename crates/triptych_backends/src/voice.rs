//! Voice-synthesis client.

use async_trait::async_trait;
use serde::Serialize;
use triptych_error::{NotificationError, NotificationErrorKind, TriptychResult};
use triptych_interface::{Announcer, Playback};
use tracing::{debug, instrument};

/// Environment variable overriding the voice service endpoint.
const ENDPOINT_VAR: &str = "TRIPTYCH_VOICE_URL";

const DEFAULT_ENDPOINT: &str = "http://localhost:3000/voice-gen";

#[derive(Debug, Serialize)]
struct VoiceRequest<'a> {
    text: &'a str,
}

/// Client for the voice-synthesis service.
///
/// Posts plain status text and receives the synthesized clip as binary
/// audio; the returned [`Playback`] handle exposes the stop control. All
/// failures here are swallowed upstream by the orchestrator.
#[derive(Debug, Clone)]
pub struct VoiceClient {
    client: reqwest::Client,
    endpoint: String,
}

impl VoiceClient {
    /// Creates a new voice client.
    ///
    /// The endpoint defaults to the local synthesis service and can be
    /// overridden with `TRIPTYCH_VOICE_URL`.
    pub fn new() -> Self {
        let endpoint =
            std::env::var(ENDPOINT_VAR).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Creates a client against an explicit endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for VoiceClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Announcer for VoiceClient {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn speak(&self, text: &str) -> TriptychResult<Playback> {
        debug!(endpoint = %self.endpoint, "Sending voice-synthesis request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&VoiceRequest { text })
            .send()
            .await
            .map_err(|e| {
                NotificationError::new(NotificationErrorKind::Request(format!(
                    "Request failed: {}",
                    e
                )))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(
                NotificationError::new(NotificationErrorKind::Api { status, message }).into(),
            );
        }

        let mime = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let audio = response
            .bytes()
            .await
            .map_err(|e| NotificationError::new(NotificationErrorKind::Body(e.to_string())))?
            .to_vec();

        debug!(audio_bytes = audio.len(), "Received synthesized audio");
        Ok(Playback::new(mime, audio))
    }
}
