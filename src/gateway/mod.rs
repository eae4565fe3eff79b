//! HTTP hosting for the gateway: method routing, CORS, serialization.
//!
//! This layer owns no decision logic beyond status mapping. It validates
//! configuration, runs persona injection, hands the prompt to the adapter,
//! and serializes whatever the normalizer returns.

mod cors;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{middleware, Json, Router};
use serde_json::json;

use crate::adapters::{self, ProviderAdapter};
use crate::config::ProviderConfig;
use crate::normalize::normalize;
use crate::persona;
use crate::transport::HttpTransport;
use crate::types::ChatRequest;
use crate::Result;

pub use cors::{ALLOWED_HEADERS, ALLOWED_METHODS};

/// Shared, read-only per-process state. Concurrent requests borrow it; no
/// locks, no mutation.
pub struct AppState {
    config: ProviderConfig,
    adapter: Box<dyn ProviderAdapter>,
    transport: HttpTransport,
}

impl AppState {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let adapter = adapters::create_adapter(config.backend);
        let transport = HttpTransport::new()?;
        Ok(Self {
            config,
            adapter,
            transport,
        })
    }
}

/// Build the router: one endpoint, `POST` for chat, `OPTIONS` for
/// preflight, anything else 405.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/chat",
            post(chat).options(preflight).fallback(method_not_allowed),
        )
        .layer(middleware::from_fn(cors::apply))
        .with_state(state)
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method Not Allowed" })),
    )
        .into_response()
}

async fn chat(State(state): State<Arc<AppState>>, Json(request): Json<ChatRequest>) -> Response {
    // Configuration comes first, independent of the request content: a
    // missing credential must never reach the network path.
    if let Err(err) = state.config.require_credential() {
        tracing::warn!(%err, "rejecting chat request");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": err.to_string() })),
        )
            .into_response();
    }

    let prompt = persona::inject_default(&request.message);
    let outcome = state
        .adapter
        .send(&prompt, &state.config, &state.transport)
        .await;

    let status = if outcome.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    if let Err(err) = &outcome {
        tracing::warn!(%err, backend = %state.config.backend, "chat request failed");
    }

    (status, Json(normalize(outcome))).into_response()
}
