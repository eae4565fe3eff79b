use std::env;
use std::time::Duration;

use crate::adapters::AdapterRequest;
use crate::Result;

/// Result of one HTTP exchange: status plus the full body text.
///
/// The body is always read to completion before anyone interprets it —
/// status classification and JSON parsing happen in the adapter layer, never
/// here.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Shared HTTP client for outbound backend calls.
///
/// Built once per process and shared read-only across requests. One call to
/// [`HttpTransport::execute`] is exactly one network round trip: no retries,
/// no timeout override beyond the client default.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        // Minimal production-friendly defaults (env-overridable).
        let timeout_secs = env::var("CHATRELAY_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Execute a single adapter request and read the whole body.
    pub async fn execute(&self, request: &AdapterRequest) -> Result<RawResponse> {
        let mut req = self.client.post(request.url.clone()).json(&request.body);
        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        let response = req.send().await.map_err(TransportError::Http)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(TransportError::Http)?;

        tracing::debug!(status, body = %body, "raw backend response");

        Ok(RawResponse { status, body })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("transport error: {0}")]
    Other(String),
}
