//! Field-level canonicalization passes.
//!
//! This module contains the per-component normalizers:
//! - Scheme lowercasing and default-port elision
//! - Percent-encoding canonicalization
//! - Path segment collapsing
//! - Hostname folding and numeric IP decoding
//! - Query multimap parsing and stable re-encoding

pub mod host;
pub mod path;
pub mod percent;
pub mod query;
pub mod scheme;

// Re-export main functionality
pub use host::normalize_hostname;
pub use path::normalize_path;
pub use percent::normalize_percent_encoding;
pub use query::{join_query, split_query};
pub use scheme::{default_port, normalize_port, normalize_scheme};
