//! Hostname canonicalization, including numeric IP address decoding.
//!
//! Hostnames are case-insensitive and may carry a single trailing dot; both
//! are folded away. Beyond that, an IPv4 address can be written dozens of
//! ways: octal or hex octets, fewer than four groups, even a single 32-bit
//! integer, with values past the octet range wrapping modulo 2^32. All of
//! them decode to the same dotted-decimal quad so that, for example,
//! `0xC.0x2B.0x38.0x57` and `204159063` both canonicalize to `12.43.56.87`.
//!
//! See <http://www.pc-help.org/obscure.htm> for a tour of these encodings.

use once_cell::sync::Lazy;
use regex::Regex;

/// One to four dot-separated groups, each decimal, octal (leading `0`), or
/// hex (leading `0x`), anchored over the whole hostname.
static NUMERIC_IP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:([0-9]+|0x[0-9a-f]+)\.)?(?:([0-9]+|0x[0-9a-f]+)\.)?(?:([0-9]+|0x[0-9a-f]+)\.)?([0-9]+|0x[0-9a-f]+)$")
        .expect("numeric IP pattern is valid")
});

/// Parse one octet-group as decimal, octal, or hex, wrapping modulo 2^32.
///
/// Returns `None` when the text contains a digit invalid for its radix, such
/// as an `8` in an octal group.
fn parse_group(group: &str) -> Option<u32> {
    let (digits, radix) = if let Some(digits) = group.strip_prefix("0x") {
        (digits, 16)
    } else if group.starts_with('0') {
        (group, 8)
    } else {
        (group, 10)
    };

    let mut value: u32 = 0;
    for c in digits.chars() {
        let digit = c.to_digit(radix)?;
        value = value.wrapping_mul(radix).wrapping_add(digit);
    }
    Some(value)
}

/// Decode a numeric IP expression into dotted-decimal form.
///
/// With fewer than four groups the last group absorbs the remaining
/// low-order bits:
/// - 1 group: all 32 bits
/// - 2 groups: 8 + 24 bits
/// - 3 groups: 8 + 8 + 16 bits
/// - 4 groups: 8 + 8 + 8 + 8 bits
///
/// Returns `None` when the hostname is not a numeric IP expression.
fn decode_numeric_ip(hostname: &str) -> Option<String> {
    let caps = NUMERIC_IP.captures(hostname)?;
    let groups: Vec<&str> = [caps.get(1), caps.get(2), caps.get(3), caps.get(4)]
        .into_iter()
        .flatten()
        .map(|m| m.as_str())
        .collect();

    let address = match groups.as_slice() {
        [g0] => parse_group(g0)?,
        [g0, g1] => {
            ((parse_group(g0)? & 0xff) << 24) | (parse_group(g1)? & 0x00ff_ffff)
        }
        [g0, g1, g2] => {
            ((parse_group(g0)? & 0xff) << 24)
                | ((parse_group(g1)? & 0xff) << 16)
                | (parse_group(g2)? & 0xffff)
        }
        [g0, g1, g2, g3] => {
            ((parse_group(g0)? & 0xff) << 24)
                | ((parse_group(g1)? & 0xff) << 16)
                | ((parse_group(g2)? & 0xff) << 8)
                | (parse_group(g3)? & 0xff)
        }
        _ => return None,
    };

    Some(format!(
        "{}.{}.{}.{}",
        (address >> 24) & 0xff,
        (address >> 16) & 0xff,
        (address >> 8) & 0xff,
        address & 0xff
    ))
}

/// Canonicalize a hostname.
///
/// This function:
/// 1. Lowercases the hostname.
/// 2. Strips exactly one trailing dot.
/// 3. Rewrites it as a dotted-decimal quad when the whole string reads as a
///    numeric IP expression; otherwise returns it as-is.
///
/// A domain like `ab.cd.ee.ee` is safe even though every label is valid hex:
/// without a `0x` prefix those labels are not numeric, so the IP pattern
/// does not match.
///
/// # Examples
///
/// ```
/// use urlnorm::normalize_hostname;
///
/// assert_eq!(normalize_hostname("Domain.TEST."), "domain.test");
/// assert_eq!(normalize_hostname("0xC.0x2B.0x38.0x57"), "12.43.56.87");
/// ```
pub fn normalize_hostname(hostname: &str) -> String {
    let mut hostname = hostname.to_lowercase();
    if hostname.ends_with('.') {
        hostname.pop();
    }

    match decode_numeric_ip(&hostname) {
        Some(address) => address,
        None => hostname,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_trailing_dot_folded() {
        let cases = vec![
            ("domain.test", "domain.test"),
            ("DOMAIN.TEST", "domain.test"),
            ("Domain.Test.", "domain.test"),
            ("", ""),
        ];

        for (input, expected) in cases {
            assert_eq!(
                normalize_hostname(input),
                expected,
                "hostname '{}' should normalize to '{}'",
                input,
                expected
            );
        }
    }

    #[test]
    fn test_numeric_ip_encodings() {
        // Every spelling of 12.43.56.87 that the decoder must recognize:
        // octal and hex octets, merged low-order groups, single 32-bit
        // integers, zero padding, and values that wrap modulo 2^32.
        let cases = vec![
            "12.43.56.87",
            "014.053.070.0127",
            "0xC.0x2B.0x38.0x57",
            "0xc.0x2b.0x38.0x57",
            "12.43.14423",
            "12.2832471",
            "204159063",
            "014.053.034127",
            "014.012634127",
            "01412634127",
            "0xc.0x2b.0x3857",
            "0xc.0x2b3857",
            "0xC2B3857",
            "00014.00053.00070.000127",
            "0x000C.0x0002B.0x00038.0x00057",
            "00001412634127",
            "0x000C2B3857",
            "30268930135",
            "0341412634127",
            "0x70C2B3857",
            "524.555.568.599",
            "01014.01053.01070.01127",
            "0x20C.0x22B.0x238.0x257",
        ];

        for input in cases {
            assert_eq!(
                normalize_hostname(input),
                "12.43.56.87",
                "'{}' should decode to 12.43.56.87",
                input
            );
        }
    }

    #[test]
    fn test_capital_hex_prefix_decodes() {
        // Case folding happens before matching, so 0X works as well as 0x.
        assert_eq!(normalize_hostname("0XC.0X2B.0X38.0X57"), "12.43.56.87");
    }

    #[test]
    fn test_hex_looking_domain_is_not_an_ip() {
        // Labels without a 0x prefix are not numeric, so the pattern fails
        // and the domain passes through.
        assert_eq!(normalize_hostname("ab.cd.ee.ee"), "ab.cd.ee.ee");
    }

    #[test]
    fn test_partial_groups_spread_bits() {
        assert_eq!(normalize_hostname("1.2"), "1.0.0.2");
        assert_eq!(normalize_hostname("1.2.3"), "1.2.0.3");
        assert_eq!(normalize_hostname("0"), "0.0.0.0");
        assert_eq!(normalize_hostname("4294967295"), "255.255.255.255");
    }

    #[test]
    fn test_invalid_octal_digit_is_not_an_ip() {
        // 08 matches the pattern but 8 is not an octal digit, so the IP
        // interpretation is abandoned and the hostname passes through.
        assert_eq!(normalize_hostname("08.1.1.1"), "08.1.1.1");
    }

    #[test]
    fn test_octet_overflow_wraps() {
        assert_eq!(normalize_hostname("524.555.568.599"), "12.43.56.87");
        assert_eq!(normalize_hostname("256.256.256.256"), "0.0.0.0");
    }
}
