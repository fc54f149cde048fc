//! Percent-encoding canonicalization.
//!
//! `%7E` and `%7e` and `~` are three spellings of the same character. This
//! pass rewrites every `%XX` triple in the raw URL text to a single canonical
//! form: unreserved characters become literals, everything else keeps its
//! escape with the hex digits uppercased. It runs once over the whole string
//! before any structural parsing.

/// Bytes that never need percent-encoding.
fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~')
}

/// Decode two ASCII hex digits into the byte they spell, if both are hex.
fn decode_hex_pair(high: u8, low: u8) -> Option<u8> {
    let high = (high as char).to_digit(16)?;
    let low = (low as char).to_digit(16)?;
    Some((high * 16 + low) as u8)
}

/// Rewrite every `%XX` escape in `url` to its canonical form.
///
/// This function:
/// 1. Decodes each `%XX` triple (hex digits, case-insensitive).
/// 2. Replaces the triple with the literal character when the decoded byte
///    is unreserved (`A-Za-z0-9-_.~`).
/// 3. Re-emits the triple with uppercase hex digits otherwise.
/// 4. Copies all other text through untouched, including `%` signs that are
///    not followed by two hex digits.
pub fn normalize_percent_encoding(url: &str) -> String {
    let bytes = url.as_bytes();
    let mut out = String::with_capacity(url.len());
    let mut i = 0;

    while i < bytes.len() {
        let escape = if bytes[i] == b'%' && i + 2 < bytes.len() {
            decode_hex_pair(bytes[i + 1], bytes[i + 2])
        } else {
            None
        };

        match escape {
            Some(value) if is_unreserved(value) => {
                out.push(value as char);
                i += 3;
            }
            Some(value) => {
                out.push_str(&format!("%{:02X}", value));
                i += 3;
            }
            None => {
                // Copy verbatim up to the next candidate escape. A percent
                // sign is plain ASCII, so its byte offset is a valid slice
                // boundary even in the middle of multibyte text.
                let rest = &url[i..];
                if rest.starts_with('%') {
                    out.push('%');
                    i += 1;
                } else if let Some(offset) = rest.find('%') {
                    out.push_str(&rest[..offset]);
                    i += offset;
                } else {
                    out.push_str(rest);
                    break;
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreserved_escapes_become_literals() {
        let cases = vec![
            ("%7e", "~"),
            ("%7E", "~"),
            ("%41%42%43", "ABC"),
            ("http://d/%61", "http://d/a"),
        ];

        for (input, expected) in cases {
            assert_eq!(
                normalize_percent_encoding(input),
                expected,
                "'{}' should decode to '{}'",
                input,
                expected
            );
        }
    }

    #[test]
    fn test_reserved_escapes_uppercased() {
        let cases = vec![
            ("%2f", "%2F"),
            ("%2F", "%2F"),
            ("%5e", "%5E"),
            ("http://d/a%3db", "http://d/a%3Db"),
        ];

        for (input, expected) in cases {
            assert_eq!(
                normalize_percent_encoding(input),
                expected,
                "'{}' should re-encode as '{}'",
                input,
                expected
            );
        }
    }

    #[test]
    fn test_bare_percent_passes_through() {
        let cases = vec![
            ("%", "%"),
            ("100%", "100%"),
            ("%zz", "%zz"),
            ("%4", "%4"),
            ("%%41", "%A"), // second triple is valid, first percent is not
        ];

        for (input, expected) in cases {
            assert_eq!(normalize_percent_encoding(input), expected);
        }
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(
            normalize_percent_encoding("http://domain.test/path?a=1"),
            "http://domain.test/path?a=1"
        );
        assert_eq!(normalize_percent_encoding(""), "");
    }

    #[test]
    fn test_double_encoding_is_preserved() {
        // %25 decodes to '%', which is reserved, so it stays escaped rather
        // than collapsing into a new escape on the next pass.
        assert_eq!(normalize_percent_encoding("%2541"), "%2541");
        assert_eq!(
            normalize_percent_encoding(&normalize_percent_encoding("%2541")),
            "%2541"
        );
    }
}
