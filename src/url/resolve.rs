//! Relative URL reference resolution.

use crate::url::split::split_reference;

/// Schemes whose URLs may be extended by relative references.
const USES_RELATIVE: &[&str] = &[
    "", "ftp", "http", "gopher", "nntp", "imap", "wais", "file", "https",
    "shttp", "mms", "prospero", "rtsp", "rtsps", "rtspu", "sftp", "svn",
    "svn+ssh", "ws", "wss",
];

fn uses_relative(scheme: &str) -> bool {
    USES_RELATIVE.contains(&scheme)
}

/// Resolve a (possibly relative) URL reference against a base URL.
///
/// This function:
/// 1. Returns the other string outright when either side is empty.
/// 2. Inherits the base's scheme when the reference has none; a reference
///    whose scheme differs from the base's, or that cannot carry relative
///    references, is returned as-is.
/// 3. Keeps a reference with its own authority untouched apart from the
///    scheme default.
/// 4. Inherits the base's authority, and for an empty reference path also
///    its path, plus its query when the reference carries none. The fragment
///    always comes from the reference.
/// 5. Otherwise merges the reference path onto the base path's directory,
///    collapsing `.` and `..` segments.
pub fn resolve(base: &str, url: &str) -> String {
    if base.is_empty() {
        return url.to_string();
    }
    if url.is_empty() {
        return base.to_string();
    }

    let base_split = split_reference(base);
    let reference = split_reference(url);

    let scheme = if reference.scheme.is_empty() {
        base_split.scheme.clone()
    } else {
        reference.scheme.clone()
    };

    if scheme != base_split.scheme || !uses_relative(&scheme) {
        return url.to_string();
    }

    if !reference.netloc.is_empty() {
        return unsplit(
            &scheme,
            &reference.netloc,
            &reference.path,
            &reference.query,
            &reference.fragment,
        );
    }
    let netloc = &base_split.netloc;

    if reference.path.is_empty() {
        let query = if reference.query.is_empty() {
            &base_split.query
        } else {
            &reference.query
        };
        return unsplit(&scheme, netloc, &base_split.path, query, &reference.fragment);
    }

    let segments: Vec<&str> = if reference.path.starts_with('/') {
        reference.path.split('/').collect()
    } else {
        // Drop the base path's final segment unless it is a directory,
        // then splice the reference path on and clear interior empties.
        let mut segments: Vec<&str> = base_split.path.split('/').collect();
        if !matches!(segments.last(), Some(&"")) {
            segments.pop();
        }
        segments.extend(reference.path.split('/'));

        if segments.len() > 2 {
            let end = segments.len() - 1;
            let mut filtered = Vec::with_capacity(segments.len());
            filtered.push(segments[0]);
            filtered.extend(segments[1..end].iter().copied().filter(|s| !s.is_empty()));
            filtered.push(segments[end]);
            segments = filtered;
        }
        segments
    };

    let mut resolved: Vec<&str> = Vec::with_capacity(segments.len());
    for &segment in &segments {
        if segment == ".." {
            resolved.pop();
        } else if segment != "." {
            resolved.push(segment);
        }
    }

    // A trailing '.' or '..' leaves the result pointing at a directory.
    if matches!(segments.last(), Some(&".") | Some(&"..")) {
        resolved.push("");
    }

    let joined = resolved.join("/");
    let path = if joined.is_empty() {
        "/".to_string()
    } else {
        joined
    };

    unsplit(&scheme, netloc, &path, &reference.query, &reference.fragment)
}

/// Reassemble raw split parts without any canonicalization.
fn unsplit(scheme: &str, netloc: &str, path: &str, query: &str, fragment: &str) -> String {
    let mut url = if !netloc.is_empty() || path.starts_with("//") {
        let path = if !path.is_empty() && !path.starts_with('/') {
            format!("/{}", path)
        } else {
            path.to_string()
        };
        format!("//{}{}", netloc, path)
    } else {
        path.to_string()
    };

    if !scheme.is_empty() {
        url = format!("{}:{}", scheme, url);
    }
    if !query.is_empty() {
        url = format!("{}?{}", url, query);
    }
    if !fragment.is_empty() {
        url = format!("{}#{}", url, fragment);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sides_pass_through() {
        assert_eq!(resolve("", "http://d/p"), "http://d/p");
        assert_eq!(resolve("http://d/p", ""), "http://d/p");
    }

    #[test]
    fn test_relative_paths_merge_onto_base_directory() {
        let cases = vec![
            ("http://d2/", "p", "http://d2/p"),
            ("http://a/b/c", "d", "http://a/b/d"),
            ("http://a/b/c", "/d", "http://a/d"),
            ("http://a/b/c", "../d", "http://a/d"),
            ("http://a/b/", "c/", "http://a/b/c/"),
            ("http://a/b", "./", "http://a/"),
            ("http://a/b/c", "..", "http://a/"),
        ];

        for (base, url, expected) in cases {
            assert_eq!(
                resolve(base, url),
                expected,
                "'{}' against '{}' should resolve to '{}'",
                url,
                base,
                expected
            );
        }
    }

    #[test]
    fn test_parent_segments_stop_at_root() {
        assert_eq!(resolve("http://a/", "../../x"), "http://a/x");
    }

    #[test]
    fn test_reference_with_authority_stands_alone() {
        assert_eq!(resolve("http://a/b", "http://c/d"), "http://c/d");
        assert_eq!(resolve("http://a/b", "//c/d"), "http://c/d");
    }

    #[test]
    fn test_foreign_scheme_returned_verbatim() {
        assert_eq!(resolve("http://a/", "https://c/"), "https://c/");
        assert_eq!(resolve("http://a/", "mailto:u@d"), "mailto:u@d");
    }

    #[test]
    fn test_empty_path_inherits_from_base() {
        assert_eq!(resolve("http://a/b?q0", "?q1"), "http://a/b?q1");
        assert_eq!(resolve("http://a/b#f0", "#f1"), "http://a/b#f1");
    }

    #[test]
    fn test_base_fragment_is_never_inherited() {
        let cases = vec![
            ("http://a/b#f0", "#", "http://a/b"),
            ("http://a/b#f0", "?", "http://a/b"),
            ("http://a/b#f0", "http:", "http://a/b"),
            // the query is still inherited while the fragment is dropped
            ("http://a/b?q0#f0", "//", "http://a/b?q0"),
        ];

        for (base, url, expected) in cases {
            assert_eq!(
                resolve(base, url),
                expected,
                "'{}' against '{}' should resolve to '{}'",
                url,
                base,
                expected
            );
        }
    }

    #[test]
    fn test_schemeless_base_resolves_relatively() {
        assert_eq!(resolve("p1/p2", "p3"), "p1/p3");
    }
}
