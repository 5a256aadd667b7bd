//! HTTP client for a `/synthesize` text-to-speech server.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use crate::{Result, SynthesisRequest, Synthesizer, TTSError};

/// Client that POSTs JSON to `{base}/synthesize` and returns the audio body.
#[derive(Clone)]
pub struct HttpSynthesizer {
    endpoint: Url,
    client: Client,
}

impl HttpSynthesizer {
    /// Create a client for the server at `base_url` (e.g. `http://localhost:8000`).
    ///
    /// A path on the base URL is kept, so `http://host/api` posts to
    /// `http://host/api/synthesize`.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(base_url, Client::new())
    }

    /// Like [`HttpSynthesizer::new`] but reuses an existing [`Client`].
    pub fn with_client(base_url: &str, client: Client) -> Result<Self> {
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let endpoint = Url::parse(&base)?.join("synthesize")?;
        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Synthesizer for HttpSynthesizer {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>> {
        info!(url = %self.endpoint, preset = ?request.voice_preset(), "requesting synthesis");
        let resp = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;
        let status = resp.status();
        debug!(status = status.as_u16(), "synthesis response");

        if !status.is_success() {
            let body = resp.bytes().await.unwrap_or_default();
            return Err(status_error(status.as_u16(), &body));
        }

        let bytes = resp.bytes().await?;
        Ok(bytes.to_vec())
    }
}

/// Build the error for a non-success response.
///
/// A JSON body with a non-empty string `detail` supplies the message;
/// anything else falls back to a message naming the status code.
fn status_error(status: u16, body: &[u8]) -> TTSError {
    let detail = serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string))
        .filter(|d| !d.is_empty());
    let message = detail.unwrap_or_else(|| format!("HTTP error! Status: {status}"));
    TTSError::Status { status, message }
}
