//! # chatrelay
//!
//! Single-endpoint persona chat gateway. Accepts one user message over
//! HTTP, prepends a fixed conversational persona, forwards the prompt to a
//! configurable LLM backend through a provider-adapter abstraction, and
//! returns a normalized JSON reply.
//!
//! The adapter contract is the core of the crate: one trait, one concrete
//! implementation per backend wire format, one stable failure taxonomy.
//! Whatever the backend does — refuses the call, returns garbage, omits the
//! reply field — the caller always receives well-formed JSON.
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Provider adapter trait and the per-backend implementations |
//! | [`config`] | Process configuration loaded once from the environment |
//! | [`error`] | Unified failure taxonomy for the adapter contract |
//! | [`gateway`] | HTTP hosting: routing, CORS, serialization |
//! | [`normalize`] | Maps adapter outcomes to the external response shape |
//! | [`persona`] | Fixed system instruction injected into every prompt |
//! | [`transport`] | Shared reqwest-based HTTP client transport |
//! | [`types`] | Request-scoped wire types |

pub mod adapters;
pub mod config;
pub mod error;
pub mod gateway;
pub mod normalize;
pub mod persona;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use adapters::{create_adapter, ProviderAdapter, FALLBACK_REPLY};
pub use config::{BackendKind, ProviderConfig};
pub use error::Error;
pub use gateway::AppState;
pub use normalize::normalize;
pub use types::{ChatRequest, ChatResponse, OutboundPrompt};

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, Error>;
