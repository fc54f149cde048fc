//! Scheme and port canonicalization.
//!
//! Schemes compare case-insensitively, so the canonical form is lowercase.
//! A port that equals the scheme's well-known default carries no information
//! and is dropped, which makes `http://host/` and `http://host:80/` render
//! identically.

/// Well-known default ports, keyed by canonical scheme.
const DEFAULT_PORTS: &[(&str, &str)] = &[("http", "80"), ("https", "443")];

/// Look up the default port for a canonical (lowercase) scheme.
pub fn default_port(scheme: &str) -> Option<&'static str> {
    DEFAULT_PORTS
        .iter()
        .find(|(name, _)| *name == scheme)
        .map(|(_, port)| *port)
}

/// Canonicalize a scheme: lowercase it, with an absent scheme defaulting to
/// `http`.
pub fn normalize_scheme(scheme: &str) -> String {
    if scheme.is_empty() {
        "http".to_string()
    } else {
        scheme.to_ascii_lowercase()
    }
}

/// Drop a port that matches the scheme's default, pass anything else through.
///
/// The comparison is textual: a zero-padded default such as `:080` is not
/// recognized as port 80 and is kept verbatim.
pub fn normalize_port(port: &str, scheme: &str) -> String {
    if !port.is_empty() && default_port(scheme) == Some(port) {
        return String::new();
    }
    port.to_string()
}
