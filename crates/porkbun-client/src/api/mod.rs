//! API endpoint modules.

mod domain;
mod record;

pub use domain::Domain;
pub use record::DnsRecord;
