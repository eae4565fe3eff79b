//! Google Gemini generateContent adapter — the free-form REST variant.
//!
//! Key differences from the other backends:
//! - `contents` with `parts` instead of a `messages` array; the whole
//!   prompt travels as one user-role message, instruction included.
//! - `generationConfig` wraps temperature and `maxOutputTokens`.
//! - The API key is passed as a `?key=` query parameter, not in headers.
//! - Reply lives at `candidates[0].content.parts[0].text`.

use std::collections::HashMap;

use serde_json::Value;

use crate::config::{BackendKind, ProviderConfig};
use crate::types::OutboundPrompt;
use crate::Result;

use super::{endpoint, AdapterRequest, ProviderAdapter};

#[derive(Debug, Default)]
pub struct GeminiAdapter;

impl GeminiAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl ProviderAdapter for GeminiAdapter {
    fn backend(&self) -> BackendKind {
        BackendKind::Gemini
    }

    fn build_request(
        &self,
        prompt: &OutboundPrompt,
        config: &ProviderConfig,
    ) -> Result<AdapterRequest> {
        let key = config.require_credential()?;

        let path = format!("/v1/models/{}:generateContent", config.model);
        let mut url = endpoint(&config.base_url, &path)?;
        url.query_pairs_mut().append_pair("key", key);

        let body = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt.flatten() }],
            }],
            "generationConfig": {
                "temperature": config.temperature,
                "maxOutputTokens": config.max_output_tokens,
            },
        });

        Ok(AdapterRequest {
            url,
            headers: HashMap::new(),
            body,
        })
    }

    fn extract_reply(&self, body: &Value) -> Option<String> {
        body.pointer("/candidates/0/content/parts/0/text")
            .and_then(|v| v.as_str())
            .map(String::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona;

    fn test_config() -> ProviderConfig {
        ProviderConfig::new(BackendKind::Gemini, "test-key", "gemini-1.5-pro")
    }

    #[test]
    fn build_request_puts_key_in_query() {
        let adapter = GeminiAdapter::new();
        let prompt = persona::inject_default("hello");
        let req = adapter.build_request(&prompt, &test_config()).unwrap();

        assert_eq!(
            req.url.path(),
            "/v1/models/gemini-1.5-pro:generateContent"
        );
        assert_eq!(req.url.query(), Some("key=test-key"));
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_request_flattens_prompt_into_one_user_message() {
        let adapter = GeminiAdapter::new();
        let prompt = persona::inject_default("hello");
        let req = adapter.build_request(&prompt, &test_config()).unwrap();

        assert_eq!(req.body["contents"][0]["role"], "user");
        let text = req.body["contents"][0]["parts"][0]["text"]
            .as_str()
            .unwrap();
        assert!(text.starts_with(persona::SYSTEM_INSTRUCTION));
        assert!(text.ends_with("User: hello"));

        assert_eq!(req.body["generationConfig"]["temperature"], 0.7);
        assert_eq!(req.body["generationConfig"]["maxOutputTokens"], 1024);
    }

    #[test]
    fn build_request_without_credential_is_a_configuration_error() {
        let adapter = GeminiAdapter::new();
        let prompt = persona::inject_default("hello");
        let config = test_config().without_credential();
        let err = adapter.build_request(&prompt, &config).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn extract_reply_follows_candidate_path() {
        let adapter = GeminiAdapter::new();
        let body = serde_json::json!({
            "candidates": [{
                "content": { "parts": [{"text": "Hey! Kaise ho?"}], "role": "model" },
                "finishReason": "STOP"
            }]
        });
        assert_eq!(
            adapter.extract_reply(&body).as_deref(),
            Some("Hey! Kaise ho?")
        );
    }

    #[test]
    fn extract_reply_tolerates_missing_fields() {
        let adapter = GeminiAdapter::new();
        assert_eq!(adapter.extract_reply(&serde_json::json!({})), None);
        assert_eq!(
            adapter.extract_reply(&serde_json::json!({"candidates": []})),
            None
        );
        assert_eq!(
            adapter.extract_reply(&serde_json::json!({"candidates": [{"content": {}}]})),
            None
        );
    }
}
