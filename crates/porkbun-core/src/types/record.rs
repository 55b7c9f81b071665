use crate::{PorkbunError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Response of `dns/retrieve/{domain}`
#[derive(Debug, Clone, Deserialize)]
pub struct RetrieveRecordsResponse {
    /// `SUCCESS` or `ERROR`
    #[serde(default)]
    pub status: Option<String>,

    /// Provider message, usually only set on errors
    #[serde(default)]
    pub message: Option<String>,

    /// Records of the domain; `None` when the field is missing
    #[serde(default)]
    pub records: Option<Vec<RecordEntry>>,
}

impl RetrieveRecordsResponse {
    /// Take the record list, failing if the provider left it out
    pub fn into_records(self) -> Result<Vec<RecordEntry>> {
        self.records
            .ok_or_else(|| PorkbunError::missing_field("records", self.message))
    }
}

/// A single DNS record as returned by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordEntry {
    /// Fully qualified record name (`www.example.com`)
    pub name: String,

    /// Record type (A, AAAA, CNAME, MX, TXT, ...)
    #[serde(rename = "type")]
    pub record_type: String,

    /// Record value
    pub content: String,

    /// Provider record id
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,

    /// TTL in seconds, as sent by the provider
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub ttl: Option<String>,

    /// Priority (MX, SRV)
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub prio: Option<String>,

    /// Free-form notes attached in the Porkbun dashboard
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,
}

// Numeric fields arrive as "600" or 600 depending on the endpoint.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// Host label used to address a record in `editByNameType` calls.
///
/// The apex keeps its full name. Anything else loses the trailing
/// `.{domain}`; names that do not end in it are returned unchanged.
#[must_use]
pub fn short_name<'a>(full_name: &'a str, domain: &str) -> &'a str {
    if full_name == domain {
        return full_name;
    }

    full_name
        .strip_suffix(domain)
        .and_then(|rest| rest.strip_suffix('.'))
        .unwrap_or(full_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn short_name_strips_domain_suffix() {
        assert_eq!(short_name("www.example.com", "example.com"), "www");
        assert_eq!(short_name("a.b.example.com", "example.com"), "a.b");
        assert_eq!(short_name("*.example.com", "example.com"), "*");
    }

    #[test]
    fn short_name_keeps_apex() {
        assert_eq!(short_name("example.com", "example.com"), "example.com");
    }

    #[test]
    fn short_name_requires_label_boundary() {
        assert_eq!(short_name("notexample.com", "example.com"), "notexample.com");
        assert_eq!(short_name("www.other.org", "example.com"), "www.other.org");
    }

    #[test]
    fn decodes_records_with_optional_fields() {
        let response: RetrieveRecordsResponse = serde_json::from_value(json!({
            "status": "SUCCESS",
            "cloudflare": "enabled",
            "records": [
                {
                    "id": "106926659",
                    "name": "www.example.com",
                    "type": "A",
                    "content": "1.1.1.1",
                    "ttl": "600",
                    "prio": "0",
                    "notes": ""
                },
                {
                    "name": "example.com",
                    "type": "TXT",
                    "content": "v=spf1 -all"
                }
            ]
        }))
        .unwrap();

        let records = response.into_records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].record_type, "A");
        assert_eq!(records[0].ttl.as_deref(), Some("600"));
        assert_eq!(records[1].id, None);
        assert_eq!(records[1].content, "v=spf1 -all");
    }

    #[test]
    fn absent_records_vs_empty_records() {
        let empty: RetrieveRecordsResponse =
            serde_json::from_value(json!({"status": "SUCCESS", "records": []})).unwrap();
        assert!(empty.into_records().unwrap().is_empty());

        let absent: RetrieveRecordsResponse = serde_json::from_value(json!({
            "status": "ERROR",
            "message": "Domain is not opted in to API access."
        }))
        .unwrap();
        let err = absent.into_records().unwrap_err();
        assert!(err.is_protocol_error());
        assert_eq!(
            err.provider_message(),
            Some("Domain is not opted in to API access.")
        );
    }

    #[test]
    fn numeric_optional_fields_are_accepted() {
        let response: RetrieveRecordsResponse = serde_json::from_value(json!({
            "records": [{
                "id": 106926659,
                "name": "www.example.com",
                "type": "A",
                "content": "1.2.3.4",
                "ttl": 600,
                "prio": 0,
                "notes": null
            }]
        }))
        .unwrap();

        let records = response.into_records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id.as_deref(), Some("106926659"));
        assert_eq!(records[0].ttl.as_deref(), Some("600"));
        assert_eq!(records[0].prio.as_deref(), Some("0"));
        assert_eq!(records[0].notes, None);
    }

    #[test]
    fn record_without_content_is_malformed() {
        let result = serde_json::from_value::<RetrieveRecordsResponse>(json!({
            "records": [{"name": "www.example.com", "type": "A"}]
        }));
        assert!(result.is_err());
    }
}
