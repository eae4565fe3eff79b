//! Anthropic Messages adapter — the typed-client variant.
//!
//! Request and response shapes are modeled as serde structs rather than
//! free-form JSON, the way a vendor client library would. Differences from
//! the other backends:
//! - The instruction is a top-level `system` parameter, not a message.
//! - `max_tokens` is required.
//! - The credential goes in `x-api-key` plus a pinned `anthropic-version`.
//! - Reply is the first `text` content block.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{BackendKind, ProviderConfig};
use crate::types::OutboundPrompt;
use crate::Result;

use super::{endpoint, AdapterRequest, ProviderAdapter};

const MESSAGES_PATH: &str = "/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<OutboundMessage<'a>>,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct OutboundMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Default)]
pub struct AnthropicAdapter;

impl AnthropicAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl ProviderAdapter for AnthropicAdapter {
    fn backend(&self) -> BackendKind {
        BackendKind::Anthropic
    }

    fn build_request(
        &self,
        prompt: &OutboundPrompt,
        config: &ProviderConfig,
    ) -> Result<AdapterRequest> {
        let key = config.require_credential()?;

        let url = endpoint(&config.base_url, MESSAGES_PATH)?;

        let mut headers = HashMap::new();
        headers.insert("x-api-key".to_string(), key.to_string());
        headers.insert(
            "anthropic-version".to_string(),
            ANTHROPIC_VERSION.to_string(),
        );

        let request = MessagesRequest {
            model: &config.model,
            max_tokens: config.max_output_tokens,
            system: &prompt.system_instruction,
            messages: vec![OutboundMessage {
                role: "user",
                content: &prompt.user_message,
            }],
            temperature: config.temperature,
        };
        let body = serde_json::to_value(&request).unwrap_or(Value::Null);

        Ok(AdapterRequest { url, headers, body })
    }

    fn extract_reply(&self, body: &Value) -> Option<String> {
        let parsed: MessagesResponse = serde_json::from_value(body.clone()).ok()?;
        parsed
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
    }
}
