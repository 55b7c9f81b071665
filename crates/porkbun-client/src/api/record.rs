//! DNS record editing.

use crate::PorkbunClient;
use porkbun_core::{
    is_success_status, short_name, EditContentBody, RecordEntry, Result, SessionContext,
};
use serde_json::Value;
use tracing::debug;

/// A DNS record under one of the account's domains
#[derive(Debug, Clone)]
pub struct DnsRecord {
    domain_name: String,
    short_name: String,
    entry: RecordEntry,
    client: PorkbunClient,
}

impl DnsRecord {
    pub(crate) fn from_entry(domain_name: &str, entry: RecordEntry, client: PorkbunClient) -> Self {
        Self {
            domain_name: domain_name.to_string(),
            short_name: short_name(&entry.name, domain_name).to_string(),
            entry,
            client,
        }
    }

    /// Domain the record belongs to
    #[must_use]
    pub fn domain_name(&self) -> &str {
        &self.domain_name
    }

    /// Fully qualified name as reported by the provider
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.entry.name
    }

    /// Name used to address the record in edit calls
    #[must_use]
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Record type (A, AAAA, CNAME, ...)
    #[must_use]
    pub fn record_type(&self) -> &str {
        &self.entry.record_type
    }

    /// Content at fetch time. Not updated by [`edit_content`](Self::edit_content).
    #[must_use]
    pub fn content(&self) -> &str {
        &self.entry.content
    }

    /// Provider record id
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.entry.id.as_deref()
    }

    /// TTL in seconds
    #[must_use]
    pub fn ttl(&self) -> Option<&str> {
        self.entry.ttl.as_deref()
    }

    /// Priority (MX, SRV)
    #[must_use]
    pub fn prio(&self) -> Option<&str> {
        self.entry.prio.as_deref()
    }

    /// Free-form notes attached in the Porkbun dashboard
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.entry.notes.as_deref()
    }

    /// Returns true if the record sits at the zone apex
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.entry.name == self.domain_name
    }

    /// Raw provider entry
    #[must_use]
    pub const fn entry(&self) -> &RecordEntry {
        &self.entry
    }

    /// Session inherited from the client that listed this record
    #[must_use]
    pub fn session(&self) -> &SessionContext {
        self.client.session()
    }

    /// Replace the record's content (`dns/editByNameType/{domain}/{type}/{name}`).
    ///
    /// The decoded response is returned untouched; check its `status` field
    /// to see whether the provider accepted the change. The content is sent
    /// as given, without local validation.
    pub async fn edit_content(&self, content: &str) -> Result<Value> {
        let response: Value = self
            .client
            .post(
                &[
                    "dns",
                    "editByNameType",
                    self.domain_name.as_str(),
                    self.entry.record_type.as_str(),
                    self.short_name.as_str(),
                ],
                EditContentBody { content },
            )
            .await?;

        let success = is_success_status(response.get("status").and_then(Value::as_str));
        debug!(
            domain = %self.domain_name,
            name = %self.short_name,
            record_type = %self.entry.record_type,
            success,
            "edited record content"
        );

        Ok(response)
    }
}
