use serde::Serialize;
use std::fmt;

/// Credentials and endpoint shared by every entity derived from one client.
///
/// Built once by the client and handed out behind an `Arc`; there are no
/// setters, so it never changes after construction.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionContext {
    base_url: String,
    api_key: String,
    secret_api_key: String,
}

impl SessionContext {
    /// Create a session for the given base URL and key pair
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        secret_api_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            secret_api_key: secret_api_key.into(),
        }
    }

    /// API root every endpoint path is joined onto
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Public API key
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Secret API key
    #[must_use]
    pub fn secret_api_key(&self) -> &str {
        &self.secret_api_key
    }

    /// Authentication fields injected into every request body
    #[must_use]
    pub fn auth(&self) -> AuthPayload<'_> {
        AuthPayload {
            apikey: &self.api_key,
            secretapikey: &self.secret_api_key,
        }
    }
}

// Keys never end up in logs.
impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("secret_api_key", &"<redacted>")
            .finish()
    }
}

/// The `apikey` / `secretapikey` pair every endpoint requires
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AuthPayload<'a> {
    /// Public API key
    pub apikey: &'a str,
    /// Secret API key
    pub secretapikey: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_keys() {
        let session = SessionContext::new("https://porkbun.com/api/json/v3/", "pk1_abc", "sk1_xyz");
        let out = format!("{session:?}");
        assert!(out.contains("porkbun.com"));
        assert!(!out.contains("pk1_abc"));
        assert!(!out.contains("sk1_xyz"));
    }

    #[test]
    fn auth_payload_field_names() {
        let session = SessionContext::new("http://localhost/", "pk", "sk");
        let value = serde_json::to_value(session.auth()).unwrap();
        assert_eq!(value, serde_json::json!({"apikey": "pk", "secretapikey": "sk"}));
    }
}
