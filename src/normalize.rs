//! Response normalization: the last line of defense before serialization.
//!
//! Whatever the adapter produced, the caller receives a well-formed
//! [`ChatResponse`]. Failure detail is surfaced verbatim rather than
//! genericized — integrators debugging a backend need to see exactly what
//! it said.

use crate::types::ChatResponse;
use crate::Result;

/// Prefix carried by every failure reply; the error detail follows
/// verbatim.
pub const ERROR_PREFIX: &str = "DEBUG ERROR: ";

/// Collapse an adapter outcome into the one externally observable shape.
/// Total: no input can make this fail.
pub fn normalize(result: Result<String>) -> ChatResponse {
    match result {
        Ok(reply) => ChatResponse {
            reply,
            success: true,
        },
        Err(err) => ChatResponse {
            reply: format!("{ERROR_PREFIX}{err}"),
            success: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::transport::TransportError;

    #[test]
    fn success_text_passes_through_unaltered() {
        let resp = normalize(Ok("Hey! Kaise ho?".to_string()));
        assert_eq!(resp.reply, "Hey! Kaise ho?");
        assert!(resp.success);
    }

    #[test]
    fn remote_failure_surfaces_raw_body() {
        let resp = normalize(Err(Error::Remote {
            status: 503,
            body: "quota exceeded".to_string(),
        }));
        assert!(resp.reply.starts_with(ERROR_PREFIX));
        assert!(resp.reply.contains("quota exceeded"));
        assert!(!resp.success);
    }

    #[test]
    fn transport_failure_is_prefixed() {
        let resp = normalize(Err(Error::Transport(TransportError::Other(
            "connection refused".to_string(),
        ))));
        assert!(resp.reply.starts_with(ERROR_PREFIX));
        assert!(resp.reply.contains("connection refused"));
    }

    #[test]
    fn empty_success_is_preserved_as_is() {
        // The fallback placeholder guards against empty replies upstream;
        // the normalizer itself does not rewrite content.
        let resp = normalize(Ok(String::new()));
        assert_eq!(resp.reply, "");
        assert!(resp.success);
    }
}
