//! Structural URL splitting.
//!
//! The splitter breaks a raw URL into (scheme, netloc, path, params, query,
//! fragment) without normalizing anything, then a second pass decomposes the
//! netloc into username/password/hostname/port. Splitting is deliberately
//! permissive: a URL with no scheme at all, or a bare `host:port` that the
//! naive split mistakes for `scheme:path`, is re-split with `http://`
//! prefixed. Only a URL that structurally resolves to an unsupported scheme
//! is rejected.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::UrlnormError;
use crate::types::{Authority, SplitUrl};

/// Netloc shape: optional `username[:password]@`, hostname, optional `:port`.
static NETLOC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?P<username>[^:@]+)?(?::(?P<password>[^@]*))?@)?(?P<hostname>[^:]+)(?::(?P<port>[0-9]*))?$")
        .expect("netloc pattern is valid")
});

/// Characters allowed in a scheme.
fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
}

/// Naively split a URL into its five structural parts.
///
/// This performs no scheme gating and no params extraction; it is the raw
/// decomposition shared by the full splitter and the relative-reference
/// resolver. The scheme comes back lowercased, everything else verbatim.
/// Order matters: the fragment is everything after the first `#`, and the
/// query is everything after the first `?` of what remains before it.
pub(crate) fn split_reference(url: &str) -> SplitUrl {
    let mut scheme = String::new();
    let mut rest = url;

    if let Some(colon) = url.find(':') {
        if colon > 0 && url[..colon].chars().all(is_scheme_char) {
            scheme = url[..colon].to_ascii_lowercase();
            rest = &url[colon + 1..];
        }
    }

    let mut netloc = "";
    if let Some(after) = rest.strip_prefix("//") {
        let end = after
            .find(|c| matches!(c, '/' | '?' | '#'))
            .unwrap_or(after.len());
        netloc = &after[..end];
        rest = &after[end..];
    }

    let (rest, fragment) = match rest.split_once('#') {
        Some((head, fragment)) => (head, fragment),
        None => (rest, ""),
    };

    let (path, query) = match rest.split_once('?') {
        Some((head, query)) => (head, query),
        None => (rest, ""),
    };

    SplitUrl {
        scheme,
        netloc: netloc.to_string(),
        path: path.to_string(),
        params: String::new(),
        query: query.to_string(),
        fragment: fragment.to_string(),
    }
}

/// Extract path params: everything after the first `;` found at or after the
/// last `/` of the path.
fn split_params(path: &str) -> (String, String) {
    let search_from = path.rfind('/').unwrap_or(0);
    match path[search_from..].find(';') {
        Some(offset) => {
            let split_at = search_from + offset;
            (
                path[..split_at].to_string(),
                path[split_at + 1..].to_string(),
            )
        }
        None => (path.to_string(), String::new()),
    }
}

/// Split a URL for normalization, gating on the supported schemes.
///
/// This function:
/// 1. Performs the naive five-part split.
/// 2. Moves a mailto address out of the path and into the netloc, so the
///    authority splitter can pick the address apart.
/// 3. Re-splits with an `http://` prefix when no scheme or authority was
///    found, or when a bare `host:port` was misread as `scheme:path` (the
///    path starts with a digit and the input literally reads `scheme:path`).
/// 4. Rejects any other scheme outside `http`/`https`.
/// 5. Extracts path params from the final path segment.
pub fn split_url(url: &str) -> Result<SplitUrl, UrlnormError> {
    let mut split = split_reference(url);

    if split.scheme == "mailto" {
        split.netloc = std::mem::take(&mut split.path);
        return Ok(split);
    }

    let absorbed_authority = split.netloc.is_empty()
        && split.path.starts_with(|c: char| c.is_ascii_digit())
        && url.starts_with(&format!("{}:{}", split.scheme, split.path));

    if (split.scheme.is_empty() && split.netloc.is_empty()) || absorbed_authority {
        // url may not have included a scheme, like 'domain.test', or may
        // have been in the form 'domain.test:8080'
        split = split_reference(&format!("http://{}", url));
    } else if !matches!(split.scheme.as_str(), "http" | "https") {
        return Err(UrlnormError::UnsupportedScheme(split.scheme));
    }

    let (path, params) = split_params(&split.path);
    split.path = path;
    split.params = params;
    Ok(split)
}

/// Decompose a netloc into its authority fields.
///
/// A netloc that does not fit the `[user[:pass]@]host[:port]` shape (for
/// example a non-numeric port) yields all-empty fields rather than an error.
pub fn split_netloc(netloc: &str) -> Authority {
    match NETLOC.captures(netloc) {
        Some(caps) => {
            let group = |name: &str| {
                caps.name(name)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default()
            };
            Authority {
                username: group("username"),
                password: group("password"),
                hostname: group("hostname"),
                port: group("port"),
            }
        }
        None => Authority::default(),
    }
}
