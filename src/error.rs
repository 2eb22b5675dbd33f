//! Client error types.

use thiserror::Error;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A required input was empty or zero; no request was sent.
    #[error("validation failed: {field} is empty or zero")]
    Validation {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A request payload could not be encoded to JSON.
    #[error("failed to serialize request payload: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The HTTP exchange itself failed (DNS, connect, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL construction failed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The response body did not match the expected shape.
    ///
    /// Carries the raw body so protocol/version mismatches can be diagnosed.
    #[error("failed to decode response: {source} (body: {body})")]
    Decode {
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
        /// Raw response body.
        body: String,
    },

    /// The platform reported a structured error.
    #[error("graph API error [{code}/{subcode}] {message} (trace: {trace_id})")]
    Remote {
        /// Human-readable message from the platform.
        message: String,
        /// Error type string, e.g. `OAuthException`.
        error_type: String,
        /// Numeric error code.
        code: i64,
        /// Numeric error subcode.
        subcode: i64,
        /// Trace ID for support escalation.
        trace_id: String,
    },

    /// HTTP status was success but the embedded confirmation flag was false.
    #[error("persona delete was not confirmed for {persona_id}")]
    Refused {
        /// The persona the platform refused to delete.
        persona_id: String,
    },

    /// The settings endpoint returned a non-200 status.
    ///
    /// That endpoint does not reliably return the structured error envelope,
    /// so the raw body text is surfaced as-is.
    #[error("settings request failed with status {status}: {body}")]
    Settings {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
}

impl Error {
    /// Check if this is a local validation error (no I/O was performed).
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    /// Check if this is a transport-level failure.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Check if this is a structured error reported by the platform.
    pub fn is_remote(&self) -> bool {
        matches!(self, Error::Remote { .. })
    }

    /// Check if this is a decode failure (likely protocol/version mismatch).
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }

    /// Check if the platform rejected the access token.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Remote { code: 190, .. })
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error envelope the Graph API wraps failures in.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorBody,
}

/// The nested error object inside the envelope.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(rename = "type", default)]
    pub error_type: String,
    #[serde(default)]
    pub code: i64,
    #[serde(rename = "error_subcode", default)]
    pub error_subcode: i64,
    #[serde(rename = "fbtrace_id", default)]
    pub fbtrace_id: String,
}

impl From<ErrorEnvelope> for Error {
    fn from(envelope: ErrorEnvelope) -> Self {
        Error::Remote {
            message: envelope.error.message,
            error_type: envelope.error.error_type,
            code: envelope.error.code,
            subcode: envelope.error.error_subcode,
            trace_id: envelope.error.fbtrace_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_decodes_platform_error() {
        let body = r#"{"error":{"message":"Invalid OAuth","type":"OAuthException","code":190,"fbtrace_id":"abc"}}"#;
        let envelope: ErrorEnvelope = serde_json::from_str(body).unwrap();
        let err = Error::from(envelope);

        match &err {
            Error::Remote {
                message,
                code,
                trace_id,
                ..
            } => {
                assert_eq!(message, "Invalid OAuth");
                assert_eq!(*code, 190);
                assert_eq!(trace_id, "abc");
            }
            other => panic!("expected Remote, got {other:?}"),
        }
        assert!(err.is_auth_error());
    }

    #[test]
    fn test_predicates() {
        let err = Error::Validation { field: "recipient" };
        assert!(err.is_validation());
        assert!(!err.is_remote());

        let err = Error::Refused {
            persona_id: "p1".to_string(),
        };
        assert!(!err.is_validation());
        assert!(!err.is_auth_error());
    }
}
