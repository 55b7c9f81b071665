//! Rust client for the Porkbun domain registrar API.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use porkbun::PorkbunClient;
//!
//! #[tokio::main]
//! async fn main() -> porkbun::Result<()> {
//!     let client = PorkbunClient::new("pk1_...", "sk1_...")?;
//!
//!     for domain in client.list_domains().await? {
//!         println!("{} (.{})", domain.domain_name(), domain.tld());
//!
//!         for record in domain.list_records().await? {
//!             println!("  {} {} {}", record.short_name(), record.record_type(), record.content());
//!         }
//!     }
//!
//!     // Point www at a new address
//!     if let Some(domain) = client.find_domain_by_name("example.com").await? {
//!         if let Some(www) = domain.find_record_by_name("www").await? {
//!             let response = www.edit_content("5.6.7.8").await?;
//!             println!("status: {}", response["status"]);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/porkbun/0.1.0")]

// Re-export core types
pub use porkbun_core::*;

// Re-export client
pub use porkbun_client::{
    ClientConfig, DnsRecord, Domain, PorkbunClient, PorkbunClientBuilder, DEFAULT_BASE_URL,
    DEFAULT_TIMEOUT,
};

// Re-export runtime for convenience
pub use tokio;
pub use serde;
pub use serde_json;
