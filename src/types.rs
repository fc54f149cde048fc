//! Core data structures for URL normalization.

use std::collections::BTreeMap;

/// A single query value in the canonical multimap.
///
/// The three states are distinguishable and all survive normalization:
/// `?a` is `Absent`, `?a=` is `Empty`, and `?a=1` is `Value("1")`. The
/// derived ordering (declaration order, then lexicographic within `Value`)
/// is the canonical serialization order within a key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum QueryValue {
    /// The key appeared with no `=` at all (`?a`).
    Absent,
    /// The key appeared with `=` but no value (`?a=`).
    Empty,
    /// The key appeared with a non-empty value (`?a=1`).
    Value(String),
}

/// Canonical query multimap: keys in ascending order, each holding the
/// values appended in parse order. A key may repeat in the source query
/// (`a=1&a=2`); both values land under the one key.
pub type QueryMap = BTreeMap<String, Vec<QueryValue>>;

/// The six raw strings produced by the splitter, before any normalization.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SplitUrl {
    /// Lowercased scheme, or empty if none was recognized
    pub scheme: String,
    /// Authority text between `scheme://` and the path (may be empty)
    pub netloc: String,
    /// Raw path (may be empty)
    pub path: String,
    /// Parameters split from the last path segment (rarely used)
    pub params: String,
    /// Raw query text without the leading `?`
    pub query: String,
    /// Raw fragment text without the leading `#`
    pub fragment: String,
}

/// Authority decomposition: `[username[:password]@]hostname[:port]`.
///
/// A netloc that does not match the expected shape decomposes to all-empty
/// fields rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Authority {
    /// User half of the userinfo, or empty
    pub username: String,
    /// Password half of the userinfo, or empty
    pub password: String,
    /// Hostname, or empty
    pub hostname: String,
    /// Port digits, or empty. Deliberately a string: default-port elision
    /// compares textually, so `:080` is preserved.
    pub port: String,
}

/// The normalized parts record handed to post-parse extensions and the
/// joiner. Every field is always present; absent components are empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UrlParts {
    /// Normalized scheme (`http`, `https`, or `mailto`)
    pub scheme: String,
    /// Username, or empty
    pub username: String,
    /// Password, or empty
    pub password: String,
    /// Normalized hostname
    pub hostname: String,
    /// Port digits, or empty when absent or elided as the scheme default
    pub port: String,
    /// Normalized path, starting with `/` (ignored by the joiner for the
    /// mailto shape)
    pub path: String,
    /// Parameters, passed through unmodified
    pub params: String,
    /// Canonical query multimap
    pub query: QueryMap,
    /// Fragment, or empty
    pub fragment: String,
}

impl UrlParts {
    /// Check if a userinfo block should be emitted.
    pub fn has_userinfo(&self) -> bool {
        !self.username.is_empty()
    }

    /// Check if a port is present.
    pub fn has_port(&self) -> bool {
        !self.port.is_empty()
    }

    /// Check if any query pairs are present.
    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    /// Check if a fragment is present.
    pub fn has_fragment(&self) -> bool {
        !self.fragment.is_empty()
    }

    /// Check if this record carries a mailto-shaped URL.
    pub fn is_mailto(&self) -> bool {
        self.scheme == "mailto"
    }

    /// Merge a patch into this record, field by field.
    ///
    /// Fields the patch leaves unset are untouched; populated fields
    /// overwrite the current values.
    pub fn apply(&mut self, patch: UrlPatch) {
        if let Some(scheme) = patch.scheme {
            self.scheme = scheme;
        }
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(password) = patch.password {
            self.password = password;
        }
        if let Some(hostname) = patch.hostname {
            self.hostname = hostname;
        }
        if let Some(port) = patch.port {
            self.port = port;
        }
        if let Some(path) = patch.path {
            self.path = path;
        }
        if let Some(params) = patch.params {
            self.params = params;
        }
        if let Some(query) = patch.query {
            self.query = query;
        }
        if let Some(fragment) = patch.fragment {
            self.fragment = fragment;
        }
    }
}

/// A partial overwrite of [`UrlParts`], returned by post-parse extensions.
///
/// Extensions set only the fields they intend to change; an all-unset patch
/// is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UrlPatch {
    /// Replacement scheme
    pub scheme: Option<String>,
    /// Replacement username
    pub username: Option<String>,
    /// Replacement password
    pub password: Option<String>,
    /// Replacement hostname
    pub hostname: Option<String>,
    /// Replacement port
    pub port: Option<String>,
    /// Replacement path
    pub path: Option<String>,
    /// Replacement parameters
    pub params: Option<String>,
    /// Replacement query multimap
    pub query: Option<QueryMap>,
    /// Replacement fragment
    pub fragment: Option<String>,
}
