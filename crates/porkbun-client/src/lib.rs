//! HTTP client for the Porkbun API.
//!
//! This crate provides [`PorkbunClient`], the entry point for listing domains,
//! plus the [`Domain`] and [`DnsRecord`] handles it hands out. Each handle
//! shares the client's session, so records can be edited straight from a
//! listing:
//!
//! ```rust,ignore
//! use porkbun_client::PorkbunClient;
//!
//! let client = PorkbunClient::new("pk1_...", "sk1_...")?;
//! if let Some(domain) = client.find_domain_by_name("example.com").await? {
//!     if let Some(record) = domain.find_record_by_name("www").await? {
//!         let response = record.edit_content("5.6.7.8").await?;
//!         println!("{response}");
//!     }
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/porkbun-client/0.1.0")]

mod client;
mod config;
pub mod api;

pub use api::{DnsRecord, Domain};
pub use client::{PorkbunClient, PorkbunClientBuilder, DEFAULT_BASE_URL};
pub use config::*;
pub use porkbun_core::{PorkbunError, Result, SessionContext};
