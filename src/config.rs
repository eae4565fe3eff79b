//! Process configuration loaded once from the environment.
//!
//! The gateway reads its configuration at startup and shares it read-only
//! across all requests. An absent credential is not fatal here: every chat
//! request then fails fast with a configuration error, before any network
//! attempt.

use std::env;
use std::fmt;

use crate::error::Error;
use crate::Result;

const DEFAULT_TEMPERATURE: f64 = 0.7;
const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1024;

/// Which backend wire format the gateway speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Google Gemini generateContent REST API.
    Gemini,
    /// OpenAI-compatible chat completions.
    OpenAi,
    /// Anthropic Messages API.
    Anthropic,
}

impl BackendKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "gemini" => Some(BackendKind::Gemini),
            "openai" => Some(BackendKind::OpenAi),
            "anthropic" => Some(BackendKind::Anthropic),
            _ => None,
        }
    }

    /// Environment variable holding the credential for this backend.
    pub fn credential_var(&self) -> &'static str {
        match self {
            BackendKind::Gemini => "GEMINI_API_KEY",
            BackendKind::OpenAi => "OPENAI_API_KEY",
            BackendKind::Anthropic => "ANTHROPIC_API_KEY",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            BackendKind::Gemini => "gemini-1.5-pro",
            BackendKind::OpenAi => "gpt-4o-mini",
            BackendKind::Anthropic => "claude-3-5-haiku-latest",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            BackendKind::Gemini => "https://generativelanguage.googleapis.com",
            BackendKind::OpenAi => "https://api.openai.com",
            BackendKind::Anthropic => "https://api.anthropic.com",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BackendKind::Gemini => "gemini",
            BackendKind::OpenAi => "openai",
            BackendKind::Anthropic => "anthropic",
        };
        f.write_str(name)
    }
}

/// Read-only provider configuration, shared by all requests.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub backend: BackendKind,
    credential: Option<String>,
    pub model: String,
    pub base_url: String,
    pub temperature: f64,
    pub max_output_tokens: u32,
}

impl ProviderConfig {
    pub fn new(
        backend: BackendKind,
        credential: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            credential: Some(credential.into()),
            model: model.into(),
            base_url: backend.default_base_url().to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }

    /// Point the configuration at a different endpoint, e.g. a mock server
    /// in tests or a regional deployment.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Drop the credential. Requests against this configuration fail with a
    /// configuration error before touching the network.
    pub fn without_credential(mut self) -> Self {
        self.credential = None;
        self
    }

    /// Load from the environment.
    ///
    /// `CHATRELAY_BACKEND` selects the wire format (default `gemini`); the
    /// credential comes from the backend's conventional variable
    /// (`GEMINI_API_KEY`, `OPENAI_API_KEY`, `ANTHROPIC_API_KEY`).
    pub fn from_env() -> Result<Self> {
        let backend = match env::var("CHATRELAY_BACKEND") {
            Ok(s) => BackendKind::parse(&s).ok_or_else(|| {
                Error::configuration(format!(
                    "unknown backend {s:?} (expected gemini, openai or anthropic)"
                ))
            })?,
            Err(_) => BackendKind::Gemini,
        };

        let credential = env::var(backend.credential_var())
            .ok()
            .filter(|s| !s.is_empty());
        let model = env::var("CHATRELAY_MODEL")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| backend.default_model().to_string());
        let base_url = env::var("CHATRELAY_BASE_URL")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| backend.default_base_url().to_string());
        let temperature = env::var("CHATRELAY_TEMPERATURE")
            .ok()
            .and_then(|s| s.parse::<f64>().ok())
            .unwrap_or(DEFAULT_TEMPERATURE);
        let max_output_tokens = env::var("CHATRELAY_MAX_OUTPUT_TOKENS")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(DEFAULT_MAX_OUTPUT_TOKENS);

        Ok(Self {
            backend,
            credential,
            model,
            base_url,
            temperature,
            max_output_tokens,
        })
    }

    /// Credential for the selected backend, or the configuration error that
    /// must be reported before any network attempt.
    pub fn require_credential(&self) -> Result<&str> {
        self.credential.as_deref().ok_or_else(|| {
            Error::configuration(format!("missing {}", self.backend.credential_var()))
        })
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_kind_parses_case_insensitively() {
        assert_eq!(BackendKind::parse("Gemini"), Some(BackendKind::Gemini));
        assert_eq!(BackendKind::parse("OPENAI"), Some(BackendKind::OpenAi));
        assert_eq!(
            BackendKind::parse("anthropic"),
            Some(BackendKind::Anthropic)
        );
        assert_eq!(BackendKind::parse("cohere"), None);
    }

    #[test]
    fn new_config_carries_defaults() {
        let config = ProviderConfig::new(BackendKind::Gemini, "k", "gemini-1.5-pro");
        assert_eq!(config.base_url, "https://generativelanguage.googleapis.com");
        assert_eq!(config.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(config.max_output_tokens, DEFAULT_MAX_OUTPUT_TOKENS);
        assert!(config.has_credential());
    }

    #[test]
    fn require_credential_reports_the_env_var() {
        let config =
            ProviderConfig::new(BackendKind::OpenAi, "k", "gpt-4o-mini").without_credential();
        let err = config.require_credential().unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }
}
