//! Path segment canonicalization.

/// Collapse `.`/`..` segments and redundant slashes in a path.
///
/// This function:
/// 1. Remembers whether the input ends with a trailing slash.
/// 2. Splits on `/` and drops empty segments (collapsing `//`) and `.`
///    segments.
/// 3. Pops the most recently kept segment for each `..`; a `..` with nothing
///    left to pop is simply consumed.
/// 4. Reassembles with a leading `/` and restores the trailing slash.
///
/// The empty path and any path that collapses to nothing both come back as
/// `/`.
///
/// # Examples
///
/// ```
/// use urlnorm::normalize_path;
///
/// assert_eq!(normalize_path("/a/./b/"), "/a/b/");
/// assert_eq!(normalize_path("/a/../b/"), "/b/");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> String {
    let had_trailing_slash = path.ends_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => continue,
            ".." => {
                segments.pop();
            }
            _ => segments.push(segment),
        }
    }

    let mut out = format!("/{}", segments.join("/"));
    if had_trailing_slash && !out.ends_with('/') {
        out.push('/');
    }
    out
}
