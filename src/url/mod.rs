//! URL structure handling.
//!
//! This module contains the structural operations that bracket the
//! field-level normalizers:
//! - Splitting a raw URL into scheme/netloc/path/params/query/fragment
//! - Decomposing the netloc into authority fields
//! - Resolving relative references against a base
//! - Joining normalized parts back into canonical text

pub mod join;
pub mod resolve;
pub mod split;

// Re-export main functionality
pub use join::join_parts;
pub use resolve::resolve;
pub use split::{split_netloc, split_url};
