//! urlnorm - Aggressive URL canonicalization
//!
//! Feed aggregators see the same link spelled a dozen ways: different case,
//! spare default ports, `.`/`..` path segments, shuffled query parameters,
//! hostnames written as octal or hex IP addresses. This crate folds all of
//! those into one stable canonical string, so that equality on the output
//! means "same resource" for deduplication purposes.
//!
//! # Features
//!
//! - **Total**: `normalize` always returns a string; malformed or
//!   unsupported input comes back unchanged rather than failing
//! - **Aggressive**: decodes numeric IP hostnames (decimal, octal, hex, and
//!   wrapped 32-bit forms), collapses path segments, sorts query parameters
//! - **Idempotent**: normalizing an already-canonical URL is a no-op
//! - **Extensible**: caller-owned registry of pre-parse and post-parse
//!   rewrite hooks, with ready-made plugins for common feed cleanups
//!
//! # Quick Start
//!
//! ```
//! use urlnorm::{normalize, normalize_with, plugins, Registry};
//!
//! // The one-shot form
//! assert_eq!(
//!     normalize("HTTP://Domain.TEST:80/a/../b/?z=1&a=2"),
//!     "http://domain.test/b/?a=2&z=1"
//! );
//!
//! // Numeric IP hostnames fold to dotted decimal
//! assert_eq!(normalize("http://0xC.0x2B.0x38.0x57/"), "http://12.43.56.87/");
//!
//! // Relative references resolve against a base
//! assert_eq!(
//!     normalize_with("../a.html", Some("http://domain.test/b/c.html"), &Registry::new()),
//!     "http://domain.test/a.html"
//! );
//!
//! // Hooks extend the pipeline
//! let mut registry = Registry::new();
//! registry.register_post(plugins::strip_www);
//! assert_eq!(
//!     normalize_with("http://www.domain.test/", None, &registry),
//!     "http://domain.test/"
//! );
//! ```
//!
//! # Pipeline
//!
//! Every call runs the same straight line:
//!
//! 1. Strip surrounding whitespace and embedded CR/LF, and a `feed:` prefix
//! 2. Resolve against the base URL, when one is given
//! 3. Pre-parse hooks, in registration order
//! 4. Percent-encoding canonicalization over the whole string
//! 5. Structural split into scheme/authority/path/params/query/fragment
//! 6. Field normalization: scheme, port, path, hostname, query
//! 7. Post-parse hooks, in registration order
//! 8. Canonical join
//!
//! # Supported URL Schemes
//!
//! - `http` and `https`, normalized in full
//! - `mailto`, special-cased into `scheme:user@host` shape
//! - everything else is returned byte-for-byte unchanged
//!
//! # Error Handling
//!
//! The entry points never fail: any input, including empty or binary-ish
//! garbage, produces a string. [`UrlnormError`] exists for the plugins'
//! internal decode paths and never escapes a normalize call.

// Re-export the normalization entry points
pub use crate::normalizer::{normalize, normalize_with, UrlNormalizer};

// Re-export the extension mechanism
pub use crate::registry::Registry;
pub use crate::types::{Authority, QueryMap, QueryValue, SplitUrl, UrlParts, UrlPatch};

// Re-export field-level normalizers
pub use crate::core::{
    default_port, join_query, normalize_hostname, normalize_path,
    normalize_percent_encoding, normalize_port, normalize_scheme, split_query,
};

// Re-export the structural split/join layer
pub use crate::url::{join_parts, resolve, split_netloc, split_url};

// Re-export public types
pub use crate::error::UrlnormError;

// Module declarations
pub mod core;
pub mod error;
pub mod normalizer;
pub mod plugins;
pub mod registry;
pub mod types;
pub mod url;
