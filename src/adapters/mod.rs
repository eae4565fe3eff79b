//! Provider adapter abstraction.
//!
//! One trait, one concrete implementation per backend wire format, selected
//! from configuration via [`create_adapter`]. The trait is object-safe; the
//! gateway holds a `Box<dyn ProviderAdapter>` for the lifetime of the
//! process and the same adapter serves every concurrent request.
//!
//! The default [`ProviderAdapter::send`] implements the shared outcome
//! classification, in order: transport failure, non-success status (detail
//! is the raw body), unparseable body, missing reply path (fixed fallback
//! placeholder), extracted reply. Backends only describe their request
//! shape and where the reply text lives.

pub mod anthropic;
pub mod gemini;
pub mod openai;

use std::collections::HashMap;

use serde_json::Value;
use url::Url;

use crate::config::{BackendKind, ProviderConfig};
use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::OutboundPrompt;
use crate::Result;

pub use anthropic::AnthropicAdapter;
pub use gemini::GeminiAdapter;
pub use openai::OpenAiAdapter;

/// Fixed reply used when the backend technically succeeds but supplies no
/// usable text. Never empty.
pub const FALLBACK_REPLY: &str = "Reply nahi aa paayi 😅";

/// A fully assembled backend request: target URL (with the credential
/// already applied where the backend wants it in the query), extra headers,
/// and the JSON body.
#[derive(Debug, Clone)]
pub struct AdapterRequest {
    pub url: Url,
    pub headers: HashMap<String, String>,
    pub body: Value,
}

/// Translates the uniform "send one message, get one reply" contract into
/// one specific backend's request/response schema.
#[async_trait::async_trait]
pub trait ProviderAdapter: Send + Sync + std::fmt::Debug {
    /// Wire format this adapter implements.
    fn backend(&self) -> BackendKind;

    /// Build the backend-specific request for one outbound prompt.
    ///
    /// Fails only on configuration problems (missing credential, unusable
    /// base URL); no network is touched here.
    fn build_request(
        &self,
        prompt: &OutboundPrompt,
        config: &ProviderConfig,
    ) -> Result<AdapterRequest>;

    /// Extract the reply text from a parsed response body.
    ///
    /// Total over any JSON shape: a missing intermediate field means "no
    /// reply available", never a panic.
    fn extract_reply(&self, body: &Value) -> Option<String>;

    /// Perform exactly one network round trip and classify the outcome.
    async fn send(
        &self,
        prompt: &OutboundPrompt,
        config: &ProviderConfig,
        transport: &HttpTransport,
    ) -> Result<String> {
        let request = self.build_request(prompt, config)?;

        let response = transport.execute(&request).await?;

        if !response.is_success() {
            return Err(Error::Remote {
                status: response.status,
                body: response.body,
            });
        }

        let parsed: Value = serde_json::from_str(&response.body).map_err(|e| {
            Error::MalformedResponse {
                detail: format!("{} returned non-JSON response: {e}", self.backend()),
            }
        })?;

        match self.extract_reply(&parsed) {
            Some(text) => Ok(text),
            None => {
                tracing::warn!(
                    backend = %self.backend(),
                    "response carried no reply text, using fallback"
                );
                Ok(FALLBACK_REPLY.to_string())
            }
        }
    }
}

/// Select the concrete adapter for a configured backend.
pub fn create_adapter(backend: BackendKind) -> Box<dyn ProviderAdapter> {
    match backend {
        BackendKind::Gemini => Box::new(GeminiAdapter::new()),
        BackendKind::OpenAi => Box::new(OpenAiAdapter::new()),
        BackendKind::Anthropic => Box::new(AnthropicAdapter::new()),
    }
}

/// Join a configured base URL with a backend path.
///
/// Shared by the concrete adapters; a malformed base URL is a configuration
/// error, reported before any network attempt.
pub(crate) fn endpoint(base_url: &str, path: &str) -> Result<Url> {
    Url::parse(base_url)
        .and_then(|u| u.join(path))
        .map_err(|e| Error::configuration(format!("invalid base URL {base_url:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_matches_backend_kind() {
        for kind in [
            BackendKind::Gemini,
            BackendKind::OpenAi,
            BackendKind::Anthropic,
        ] {
            assert_eq!(create_adapter(kind).backend(), kind);
        }
    }

    #[test]
    fn fallback_reply_is_not_empty() {
        assert!(!FALLBACK_REPLY.is_empty());
    }

    #[test]
    fn endpoint_rejects_garbage_base_url() {
        let err = endpoint("not a url", "/v1/messages").unwrap_err();
        assert!(err.is_configuration());
    }
}
