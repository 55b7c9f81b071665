//! Domain listing and per-domain record endpoints.

use super::DnsRecord;
use crate::PorkbunClient;
use porkbun_core::{
    DomainEntry, DomainMetadata, EmptyBody, ListDomainsResponse, Result, RetrieveRecordsResponse,
    SessionContext,
};
use tracing::{debug, warn};

impl PorkbunClient {
    /// List every domain on the account (`domain/listAll`)
    pub async fn list_domains(&self) -> Result<Vec<Domain>> {
        let response: ListDomainsResponse = self.post(&["domain", "listAll"], EmptyBody {}).await?;

        let entries = match response.into_domains() {
            Ok(entries) => entries,
            Err(err) => {
                warn!(error = %err, "domain listing rejected");
                return Err(err);
            }
        };
        debug!(count = entries.len(), "listed domains");

        Ok(entries
            .into_iter()
            .map(|entry| Domain::from_entry(entry, self.clone()))
            .collect())
    }

    /// Find a domain by exact name.
    ///
    /// Fetches the full listing on every call. Returns `Ok(None)` when the
    /// account has no such domain.
    pub async fn find_domain_by_name(&self, name: &str) -> Result<Option<Domain>> {
        let domains = self.list_domains().await?;
        Ok(domains.into_iter().find(|d| d.domain_name == name))
    }
}

/// A domain registered on the account.
///
/// Snapshot of the listing at fetch time; it is not refreshed.
#[derive(Debug, Clone)]
pub struct Domain {
    domain_name: String,
    tld: String,
    metadata: DomainMetadata,
    client: PorkbunClient,
}

impl Domain {
    fn from_entry(entry: DomainEntry, client: PorkbunClient) -> Self {
        Self {
            domain_name: entry.domain,
            tld: entry.tld,
            metadata: entry.metadata,
            client,
        }
    }

    /// Domain name (`example.com`)
    #[must_use]
    pub fn domain_name(&self) -> &str {
        &self.domain_name
    }

    /// Top-level domain (`com`)
    #[must_use]
    pub fn tld(&self) -> &str {
        &self.tld
    }

    /// Extra details from the listing
    #[must_use]
    pub const fn metadata(&self) -> &DomainMetadata {
        &self.metadata
    }

    /// Session inherited from the client that listed this domain
    #[must_use]
    pub fn session(&self) -> &SessionContext {
        self.client.session()
    }

    /// Retrieve all DNS records of this domain (`dns/retrieve/{domain}`).
    ///
    /// An empty zone yields an empty vector; only a response without a
    /// `records` field is an error.
    pub async fn list_records(&self) -> Result<Vec<DnsRecord>> {
        let response: RetrieveRecordsResponse = self
            .client
            .post(&["dns", "retrieve", self.domain_name.as_str()], EmptyBody {})
            .await?;

        let entries = match response.into_records() {
            Ok(entries) => entries,
            Err(err) => {
                warn!(domain = %self.domain_name, error = %err, "record listing rejected");
                return Err(err);
            }
        };
        debug!(domain = %self.domain_name, count = entries.len(), "listed records");

        Ok(entries
            .into_iter()
            .map(|entry| DnsRecord::from_entry(&self.domain_name, entry, self.client.clone()))
            .collect())
    }

    /// Find a record by its short name (`www`, or the domain itself for the apex)
    pub async fn find_record_by_name(&self, name: &str) -> Result<Option<DnsRecord>> {
        let records = self.list_records().await?;
        Ok(records.into_iter().find(|r| r.short_name() == name))
    }
}
