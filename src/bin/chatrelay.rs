//! chatrelay — hosts the persona chat gateway over HTTP.

use std::sync::Arc;

use anyhow::Context;
use chatrelay::gateway::{app, AppState};
use chatrelay::ProviderConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ProviderConfig::from_env()?;
    if !config.has_credential() {
        tracing::warn!(
            var = config.backend.credential_var(),
            "no credential configured; chat requests will be rejected until it is set"
        );
    }

    let addr = std::env::var("CHATRELAY_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    tracing::info!(
        %addr,
        backend = %config.backend,
        model = %config.model,
        "starting chatrelay"
    );

    let state = Arc::new(AppState::new(config)?);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app(state))
        .await
        .context("server error")?;

    Ok(())
}
