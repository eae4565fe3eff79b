//! OpenAI-compatible chat completions adapter.
//!
//! Works for OpenAI itself and the many providers that mirror its schema.
//! The instruction and the user text travel as a system + user role pair,
//! the credential as a bearer token, and the reply sits at
//! `choices[0].message.content`.

use std::collections::HashMap;

use serde_json::Value;

use crate::config::{BackendKind, ProviderConfig};
use crate::types::OutboundPrompt;
use crate::Result;

use super::{endpoint, AdapterRequest, ProviderAdapter};

const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

#[derive(Debug, Default)]
pub struct OpenAiAdapter;

impl OpenAiAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl ProviderAdapter for OpenAiAdapter {
    fn backend(&self) -> BackendKind {
        BackendKind::OpenAi
    }

    fn build_request(
        &self,
        prompt: &OutboundPrompt,
        config: &ProviderConfig,
    ) -> Result<AdapterRequest> {
        let key = config.require_credential()?;

        let url = endpoint(&config.base_url, CHAT_COMPLETIONS_PATH)?;

        let mut headers = HashMap::new();
        headers.insert("authorization".to_string(), format!("Bearer {key}"));

        let body = serde_json::json!({
            "model": config.model,
            "messages": [
                { "role": "system", "content": prompt.system_instruction },
                { "role": "user", "content": prompt.user_message },
            ],
            "temperature": config.temperature,
            "max_tokens": config.max_output_tokens,
        });

        Ok(AdapterRequest { url, headers, body })
    }

    fn extract_reply(&self, body: &Value) -> Option<String> {
        body.pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .map(String::from)
    }
}
