use thiserror::Error;

/// Unified error type for the gateway core.
///
/// Every failure an adapter can produce collapses into one of four kinds, so
/// the normalizer has a single contract to map. Display text is written to
/// be surfaced verbatim in the JSON reply: in particular, [`Error::Remote`]
/// carries the raw backend body.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or unusable configuration, detected before any network
    /// attempt.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// The request never completed at the HTTP level.
    #[error("transport error: {0}")]
    Transport(#[from] crate::transport::TransportError),

    /// The backend answered with a non-success status. `body` is the raw
    /// response text, untouched.
    #[error("remote error: HTTP {status}: {body}")]
    Remote { status: u16, body: String },

    /// The backend answered 2xx but the body was not parseable as JSON.
    #[error("malformed response: {detail}")]
    MalformedResponse { detail: String },
}

impl Error {
    /// Create a new configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// True when the failure was raised before any network attempt.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration { .. })
    }
}
