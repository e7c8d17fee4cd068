//! Screenshot capture client.

use async_trait::async_trait;
use triptych_core::PreviewImage;
use triptych_error::{CaptureError, CaptureErrorKind, TriptychResult};
use triptych_interface::CaptureBackend;
use tracing::{debug, instrument};

/// Environment variable overriding the screenshot service endpoint.
const ENDPOINT_VAR: &str = "TRIPTYCH_SCREENSHOT_URL";

const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/screenshot";

/// Client for the rendering/screenshot service.
///
/// Posts the raw document markup and receives the rendered page as binary
/// image data. Errors here are recoverable by design; the orchestrator
/// keeps the variation and leaves its preview empty.
#[derive(Debug, Clone)]
pub struct ScreenshotClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ScreenshotClient {
    /// Creates a new screenshot client.
    ///
    /// The endpoint defaults to the local rendering service and can be
    /// overridden with `TRIPTYCH_SCREENSHOT_URL`.
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

impl Default for ScreenshotClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CaptureBackend for ScreenshotClient {
    #[instrument(skip(self, markup), fields(markup_len = markup.len()))]
    async fn capture(&self, markup: &str) -> TriptychResult<PreviewImage> {
        debug!(endpoint = %self.endpoint, "Sending capture request");

        let response = self
            .client
            .post(&self.endpoint)
            .body(markup.to_string())
            .send()
            .await
            .map_err(|e| {
                CaptureError::new(CaptureErrorKind::Request(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(CaptureError::new(CaptureErrorKind::Api { status, message }).into());
        }

        let mime = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let data = response
            .bytes()
            .await
            .map_err(|e| CaptureError::new(CaptureErrorKind::Body(e.to_string())))?
            .to_vec();

        debug!(image_bytes = data.len(), "Received preview image");
        Ok(PreviewImage::new(mime, data))
    }
}
