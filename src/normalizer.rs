//! The normalization pipeline.
//!
//! This module wires the structural split/join and the field-level
//! normalizers into the single entry point the crate exposes. The pipeline
//! is a straight line: clean the raw text, resolve against a base, run
//! pre-parse hooks, split, normalize each field, run post-parse hooks, join.
//! Any URL that cannot be split into a supported shape is returned exactly
//! as it came in.

use crate::core::host::normalize_hostname;
use crate::core::path::normalize_path;
use crate::core::percent::normalize_percent_encoding;
use crate::core::query::split_query;
use crate::core::scheme::{normalize_port, normalize_scheme};
use crate::registry::Registry;
use crate::types::UrlParts;
use crate::url::{join_parts, resolve, split_netloc, split_url};

/// Normalize a URL with no base and no hooks.
///
/// # Examples
///
/// ```
/// use urlnorm::normalize;
///
/// assert_eq!(
///     normalize("HTTP://Domain.TEST:80/a/../b/"),
///     "http://domain.test/b/"
/// );
/// assert_eq!(normalize("feed:http://domain.test/feed"), "http://domain.test/feed");
///
/// // Anything outside http/https/mailto passes through byte-for-byte.
/// assert_eq!(normalize("javascript:alert('')"), "javascript:alert('')");
/// ```
pub fn normalize(url: &str) -> String {
    normalize_with(url, None, &Registry::new())
}

/// Normalize a URL against an optional base, threading the registry's hooks.
///
/// This function:
/// 1. Trims surrounding whitespace and removes every embedded `\r` and `\n`.
/// 2. Strips a leading `feed:` prefix, case-insensitively.
/// 3. Resolves the URL against `base` when one is supplied.
/// 4. Runs each registered pre-parse hook over the URL text in order.
/// 5. Canonicalizes percent-escapes across the whole string.
/// 6. Splits the URL; on an unsupported scheme the original input comes
///    back verbatim, untrimmed.
/// 7. Normalizes scheme, port, path, hostname, and query.
/// 8. Runs each registered post-parse hook in order, merging its patch.
/// 9. Joins the parts into the canonical string.
///
/// The call is total: it never panics and never fails, for any input.
pub fn normalize_with(url: &str, base: Option<&str>, registry: &Registry) -> String {
    let mut text: String = url
        .trim()
        .chars()
        .filter(|&c| c != '\r' && c != '\n')
        .collect();

    if text
        .get(..5)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("feed:"))
    {
        text.drain(..5);
    }

    if let Some(base) = base {
        text = resolve(base.trim(), &text);
    }

    let text = registry.run_pre(text);
    let text = normalize_percent_encoding(&text);

    let split = match split_url(&text) {
        Ok(split) => split,
        Err(_) => return url.to_string(),
    };

    let authority = split_netloc(&split.netloc);
    let scheme = normalize_scheme(&split.scheme);
    let port = normalize_port(&authority.port, &scheme);

    let mut parts = UrlParts {
        hostname: normalize_hostname(&authority.hostname),
        path: normalize_path(&split.path),
        query: split_query(&split.query),
        username: authority.username,
        password: authority.password,
        scheme,
        port,
        params: split.params,
        fragment: split.fragment,
    };

    registry.run_post(&mut parts);

    join_parts(&parts)
}

/// URL normalizer that owns its hook registry.
///
/// A thin wrapper over [`normalize_with`] for callers that keep a configured
/// registry alongside the entry point rather than passing one around.
///
/// # Examples
///
/// ```
/// use urlnorm::{plugins, UrlNormalizer};
///
/// let mut normalizer = UrlNormalizer::new();
/// normalizer.registry_mut().register_post(plugins::strip_www);
///
/// assert_eq!(
///     normalizer.normalize("http://www.domain.test/"),
///     "http://domain.test/"
/// );
/// ```
#[derive(Debug, Default)]
pub struct UrlNormalizer {
    registry: Registry,
}

impl UrlNormalizer {
    /// Create a normalizer with no hooks registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a normalizer around an already-populated registry.
    pub fn with_registry(registry: Registry) -> Self {
        Self { registry }
    }

    /// Mutable access to the hook registry.
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Normalize a URL using this normalizer's hooks.
    pub fn normalize(&self, url: &str) -> String {
        normalize_with(url, None, &self.registry)
    }

    /// Normalize a URL against a base using this normalizer's hooks.
    pub fn normalize_with_base(&self, url: &str, base: &str) -> String {
        normalize_with(url, Some(base), &self.registry)
    }
}
