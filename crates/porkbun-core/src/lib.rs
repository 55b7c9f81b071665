//! Core types for the Porkbun API client.
//!
//! This crate provides the foundational pieces used across the Porkbun library:
//!
//! - **Types**: Request and response schemas for the `domain` and `dns` endpoints
//! - **Session**: The immutable [`SessionContext`] shared by every derived entity
//! - **Errors**: Error handling with [`PorkbunError`]
//!
//! Nothing in here performs I/O.
//!
//! # Example
//!
//! ```rust
//! use porkbun_core::short_name;
//!
//! assert_eq!(short_name("www.example.com", "example.com"), "www");
//! assert_eq!(short_name("example.com", "example.com"), "example.com");
//! ```

#![doc(html_root_url = "https://docs.rs/porkbun-core/0.1.0")]

mod error;
pub mod types;

pub use error::{PorkbunError, Result};
pub use types::*;
