//! Error types for URL splitting and plugin payload decoding.

use thiserror::Error;

/// Errors that can occur while splitting a URL or decoding a plugin payload.
///
/// The top-level normalization entry points never surface these: they catch
/// the failure and return the original input string instead. The lower-level
/// functions (`split_url`, the msplinks decoder) expose them directly.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UrlnormError {
    /// The URL resolved to a scheme outside the set this crate canonicalizes.
    #[error("Unsupported scheme: {0}")]
    UnsupportedScheme(String),

    /// A shortener payload was not valid base64.
    #[error("Payload is not valid base64: {0}")]
    PayloadDecode(String),

    /// A decoded shortener payload was not valid UTF-8.
    #[error("Payload is not valid UTF-8")]
    PayloadEncoding,
}

impl From<base64::DecodeError> for UrlnormError {
    fn from(err: base64::DecodeError) -> Self {
        UrlnormError::PayloadDecode(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for UrlnormError {
    fn from(_: std::string::FromUtf8Error) -> Self {
        UrlnormError::PayloadEncoding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            UrlnormError::UnsupportedScheme("javascript".to_string()).to_string(),
            "Unsupported scheme: javascript"
        );

        assert_eq!(
            UrlnormError::PayloadEncoding.to_string(),
            "Payload is not valid UTF-8"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            UrlnormError::UnsupportedScheme("irc".to_string()),
            UrlnormError::UnsupportedScheme("irc".to_string())
        );
        assert_ne!(
            UrlnormError::UnsupportedScheme("irc".to_string()),
            UrlnormError::PayloadEncoding
        );
    }

    #[test]
    fn test_base64_error_conversion() {
        use base64::Engine as _;

        let decode_error = base64::engine::general_purpose::STANDARD
            .decode("not base64!")
            .unwrap_err();
        let err: UrlnormError = decode_error.into();

        match err {
            UrlnormError::PayloadDecode(_) => (),
            _ => panic!("Expected PayloadDecode variant"),
        }
    }

    #[test]
    fn test_utf8_error_conversion() {
        let utf8_error = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err: UrlnormError = utf8_error.into();

        assert_eq!(err, UrlnormError::PayloadEncoding);
    }
}
