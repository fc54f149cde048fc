//! Query string canonicalization.
//!
//! The query is parsed into a multimap and re-serialized with keys in
//! ascending order and each key's values sorted, so that `b=1&a=2` and
//! `a=2&b=1` produce the same text. A key with no `=` at all is distinct
//! from a key with an empty value: `?n` survives as `n` and `?n=` as `n=`.

use crate::types::{QueryMap, QueryValue};

/// Parse a raw query string into the canonical multimap.
///
/// Both `&` and `;` separate pairs. Each pair splits on its first `=` only,
/// so `a=b=c` is the key `a` with the value `b=c`.
pub fn split_query(query: &str) -> QueryMap {
    let mut map = QueryMap::new();
    if query.is_empty() {
        return map;
    }

    for token in query.split('&').flat_map(|chunk| chunk.split(';')) {
        let (key, value) = match token.split_once('=') {
            None => (token, QueryValue::Absent),
            Some((key, "")) => (key, QueryValue::Empty),
            Some((key, value)) => (key, QueryValue::Value(value.to_string())),
        };
        map.entry(key.to_string()).or_default().push(value);
    }

    map
}

/// Serialize the multimap back into canonical query text.
///
/// Keys are emitted in ascending order; within a key, values sort
/// absent-first, then empty, then nonempty in lexicographic order. Absent
/// renders as `key`, empty as `key=`, and nonempty as `key=value`. All
/// pairs are joined with `&`.
pub fn join_query(query: &QueryMap) -> String {
    let mut tokens: Vec<String> = Vec::new();

    for (key, values) in query {
        let mut values = values.clone();
        values.sort();

        for value in &values {
            match value {
                QueryValue::Absent => tokens.push(escape_query(key)),
                QueryValue::Empty => tokens.push(format!("{}=", escape_query(key))),
                QueryValue::Value(value) => {
                    tokens.push(format!("{}={}", escape_query(key), escape_query(value)))
                }
            }
        }
    }

    tokens.join("&")
}

/// Percent-escape every byte outside `[A-Za-z0-9_.~/-]` as uppercase `%XX`.
fn escape_query(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'_' | b'.' | b'~' | b'/' | b'-') {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{:02X}", byte));
        }
    }
    out
}
