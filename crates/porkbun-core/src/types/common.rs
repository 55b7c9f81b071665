use crate::AuthPayload;
use serde::Serialize;

/// Request body: the auth pair flattened next to the endpoint's own fields
#[derive(Debug, Clone, Serialize)]
pub struct AuthenticatedRequest<'a, B: Serialize> {
    /// Credentials
    #[serde(flatten)]
    pub auth: AuthPayload<'a>,

    /// Endpoint-specific fields
    #[serde(flatten)]
    pub body: B,
}

impl<'a, B: Serialize> AuthenticatedRequest<'a, B> {
    /// Attach credentials to a body
    #[must_use]
    pub const fn new(auth: AuthPayload<'a>, body: B) -> Self {
        Self { auth, body }
    }
}

/// Body for endpoints that take nothing beyond the credentials
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct EmptyBody {}

/// Body for `dns/editByNameType`
#[derive(Debug, Clone, Serialize)]
pub struct EditContentBody<'a> {
    /// New record content
    pub content: &'a str,
}

/// Returns true for the provider's `"SUCCESS"` status, in any case
#[must_use]
pub fn is_success_status(status: Option<&str>) -> bool {
    status.is_some_and(|s| s.eq_ignore_ascii_case("SUCCESS"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_body_serializes_to_auth_only() {
        let auth = AuthPayload {
            apikey: "pk",
            secretapikey: "sk",
        };
        let value = serde_json::to_value(AuthenticatedRequest::new(auth, EmptyBody {})).unwrap();
        assert_eq!(value, json!({"apikey": "pk", "secretapikey": "sk"}));
    }

    #[test]
    fn edit_body_carries_content() {
        let auth = AuthPayload {
            apikey: "pk",
            secretapikey: "sk",
        };
        let request = AuthenticatedRequest::new(auth, EditContentBody { content: "5.6.7.8" });
        let value = serde_json::to_value(request).unwrap();
        assert_eq!(
            value,
            json!({"apikey": "pk", "secretapikey": "sk", "content": "5.6.7.8"})
        );
    }

    #[test]
    fn success_status() {
        assert!(is_success_status(Some("SUCCESS")));
        assert!(is_success_status(Some("success")));
        assert!(!is_success_status(Some("ERROR")));
        assert!(!is_success_status(None));
    }
}
