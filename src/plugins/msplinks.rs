//! De-obfuscator for msplinks.com redirector URLs.
//!
//! MySpace wrapped outbound links through `msplinks.com`, hiding the real
//! target in a base64 payload. This pre-parse hook unwraps them so that the
//! wrapped and unwrapped forms of a link deduplicate to the same URL.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::UrlnormError;

/// Prefixes under which the redirector marker is trusted.
const ALLOWED_PREFIXES: &[&str] = &["", "www.", "http://", "http://www."];

const MARKER: &str = "msplinks.com/";

/// Pre-parse hook: replace an msplinks.com redirector URL with its decoded
/// target.
///
/// The text before the marker must be one of the trusted prefixes and the
/// remainder must be nonempty base64; the first two bytes of the decoded
/// payload are discarded. On any decode failure, or when the shape does not
/// hold, the URL passes through unchanged.
pub fn expand_msplinks(url: &str) -> String {
    let (prefix, payload) = match url.split_once(MARKER) {
        Some(halves) => halves,
        None => return url.to_string(),
    };

    if !ALLOWED_PREFIXES.contains(&prefix) || payload.is_empty() {
        return url.to_string();
    }

    decode_payload(payload).unwrap_or_else(|_| url.to_string())
}

fn decode_payload(payload: &str) -> Result<String, UrlnormError> {
    let decoded = STANDARD.decode(payload)?;
    let target = decoded.get(2..).unwrap_or_default();
    Ok(String::from_utf8(target.to_vec())?)
}
