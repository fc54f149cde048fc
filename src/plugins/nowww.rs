//! `www.` prefix stripper.

use crate::types::{UrlParts, UrlPatch};

/// Post-parse hook: drop a literal `www.` prefix from the hostname.
///
/// Only the exact four-character prefix matches; `www2.` and friends are
/// different hostnames and pass through.
pub fn strip_www(parts: &UrlParts) -> UrlPatch {
    let mut patch = UrlPatch::default();

    if let Some(bare) = parts.hostname.strip_prefix("www.") {
        patch.hostname = Some(bare.to_string());
    }

    patch
}
