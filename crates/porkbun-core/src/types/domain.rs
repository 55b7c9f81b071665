use crate::{PorkbunError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of `domain/listAll`
#[derive(Debug, Clone, Deserialize)]
pub struct ListDomainsResponse {
    /// `SUCCESS` or `ERROR`
    #[serde(default)]
    pub status: Option<String>,

    /// Provider message, usually only set on errors
    #[serde(default)]
    pub message: Option<String>,

    /// Domains on the account; `None` when the field is missing
    #[serde(default)]
    pub domains: Option<Vec<DomainEntry>>,
}

impl ListDomainsResponse {
    /// Take the domain list, failing if the provider left it out
    pub fn into_domains(self) -> Result<Vec<DomainEntry>> {
        self.domains
            .ok_or_else(|| PorkbunError::missing_field("domains", self.message))
    }
}

/// A single domain in the account listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainEntry {
    /// Full domain name (`example.com`)
    pub domain: String,

    /// Top-level domain (`com`)
    pub tld: String,

    /// Everything else the provider reports
    #[serde(flatten)]
    pub metadata: DomainMetadata,
}

/// Optional domain details, kept as the provider sent them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainMetadata {
    /// Registration status (`ACTIVE`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Registration timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<String>,

    /// Expiry timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire_date: Option<String>,

    /// Transfer lock flag, in whatever form the provider sent it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_lock: Option<Value>,

    /// WHOIS privacy flag, in whatever form the provider sent it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whois_privacy: Option<Value>,

    /// Auto-renew flag, in whatever form the provider sent it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_renew: Option<Value>,

    /// Set when the domain is registered elsewhere, in whatever form the provider sent it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_local: Option<Value>,
}

impl DomainMetadata {
    /// Transfer lock flag
    #[must_use]
    pub fn security_lock(&self) -> Option<bool> {
        flag(self.security_lock.as_ref())
    }

    /// WHOIS privacy flag
    #[must_use]
    pub fn whois_privacy(&self) -> Option<bool> {
        flag(self.whois_privacy.as_ref())
    }

    /// Auto-renew flag
    #[must_use]
    pub fn auto_renew(&self) -> Option<bool> {
        flag(self.auto_renew.as_ref())
    }

    /// Whether the domain is registered elsewhere and only uses Porkbun DNS
    #[must_use]
    pub fn not_local(&self) -> Option<bool> {
        flag(self.not_local.as_ref())
    }
}

// The API mixes "1", 1 and true for the same flag.
fn flag(value: Option<&Value>) -> Option<bool> {
    match value? {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_i64().map(|n| n != 0),
        Value::String(s) => match s.as_str() {
            "1" | "true" | "yes" => Some(true),
            "0" | "false" | "no" | "" => Some(false),
            _ => None,
        },
        _ => None,
    }
}
