//! Request-scoped wire types shared by the gateway and the adapter core.
//!
//! Everything here is transient: created for one request, discarded after
//! the reply is serialized. Nothing persists across calls.

use serde::{Deserialize, Serialize};

use crate::persona::PROMPT_SEPARATOR;

/// Inbound request body: the raw end-user text.
///
/// Empty or absent input is not rejected; it is forwarded to the backend
/// as-is.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

/// Outbound prompt: the fixed instruction first, the user text second.
///
/// Built by [`crate::persona::inject`]; owned by the current request and
/// handed to the adapter unchanged. Neither part is ever reordered or
/// truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundPrompt {
    pub system_instruction: String,
    pub user_message: String,
}

impl OutboundPrompt {
    /// Collapse both parts into a single free-form string for backends that
    /// take one user-role prompt: instruction, separator, then the literal
    /// user message.
    pub fn flatten(&self) -> String {
        format!(
            "{}{}{}",
            self.system_instruction, PROMPT_SEPARATOR, self.user_message
        )
    }
}

/// The only externally observable output shape. Always well-formed JSON,
/// regardless of what happened internally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    pub success: bool,
}
