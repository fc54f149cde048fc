//! Directory-index stripper.

use crate::types::{UrlParts, UrlPatch};

/// Filenames that servers conventionally serve for a bare directory.
const DIRECTORY_INDEXES: &[&str] = &[
    "index.htm",
    "index.html",
    "index.php",
    "index.jsp",
    "default.asp",
    "default.aspx",
];

/// Post-parse hook: drop a directory-index filename from the end of the
/// path, leaving the directory itself.
///
/// Only an exact final segment matches; `/index.html/` ends in an empty
/// segment and `/skip-index.html` is a different filename, so both pass
/// through.
pub fn strip_directory_index(parts: &UrlParts) -> UrlPatch {
    let mut patch = UrlPatch::default();

    if let Some((head, filename)) = parts.path.rsplit_once('/') {
        if DIRECTORY_INDEXES.contains(&filename) {
            patch.path = Some(format!("{}/", head));
        }
    }

    patch
}
