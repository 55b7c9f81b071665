use thiserror::Error;

/// Result type alias for Porkbun operations
pub type Result<T> = std::result::Result<T, PorkbunError>;

/// Errors that can occur when using the Porkbun API
#[derive(Error, Debug)]
pub enum PorkbunError {
    /// The response did not contain the field a listing call expects
    #[error("missing `{field}` in provider response: {}", .message.as_deref().unwrap_or("no message"))]
    ApiProtocol {
        /// Name of the absent field (`domains`, `records`)
        field: &'static str,
        /// Message reported by the provider, if any
        message: Option<String>,
    },

    /// API returned a non-success status without a JSON body
    #[error("API error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Raw response body
        message: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Request timed out
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Connection failed
    #[error("connection failed: {0}")]
    Connection(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl PorkbunError {
    /// Build a protocol error for a missing listing field
    #[must_use]
    pub const fn missing_field(field: &'static str, message: Option<String>) -> Self {
        Self::ApiProtocol { field, message }
    }

    /// Returns true if the provider answered without the expected field
    #[must_use]
    pub const fn is_protocol_error(&self) -> bool {
        matches!(self, Self::ApiProtocol { .. })
    }

    /// Returns true if the error happened below the API layer
    #[must_use]
    pub const fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Timeout(_) | Self::Connection(_)
        )
    }

    /// The provider's own message, when it sent one
    #[must_use]
    pub fn provider_message(&self) -> Option<&str> {
        match self {
            Self::ApiProtocol { message, .. } => message.as_deref(),
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Returns the HTTP status code if this is an API error
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_error_carries_provider_message() {
        let err = PorkbunError::missing_field("domains", Some("Invalid API key.".into()));
        assert!(err.is_protocol_error());
        assert_eq!(err.provider_message(), Some("Invalid API key."));
        assert_eq!(
            err.to_string(),
            "missing `domains` in provider response: Invalid API key."
        );
    }

    #[test]
    fn protocol_error_without_message() {
        let err = PorkbunError::missing_field("records", None);
        assert_eq!(err.provider_message(), None);
        assert_eq!(
            err.to_string(),
            "missing `records` in provider response: no message"
        );
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn api_error_exposes_status() {
        let err = PorkbunError::Api {
            code: 503,
            message: "<html>down</html>".into(),
        };
        assert_eq!(err.status_code(), Some(503));
        assert!(!err.is_protocol_error());
        assert!(!err.is_transport_error());
    }

    #[test]
    fn transport_errors() {
        assert!(PorkbunError::Timeout(30_000).is_transport_error());
        assert_eq!(
            PorkbunError::Timeout(250).to_string(),
            "request timed out after 250 ms"
        );
        assert!(PorkbunError::Connection("refused".into()).is_transport_error());
        assert!(PorkbunError::Http("reset".into()).is_transport_error());
    }
}
