//! Errors produced while building or addressing a `Value`.
//!
//! Construction and decoding fail through two separate channels. The universal
//! constructor reports [`InitializationError`]; the serde_json codec reports its own
//! [`DecodeError`], which is handed back to the caller untouched. Query misses are not
//! errors at all, they surface as `None`.

use thiserror::Error;

/// The input handed to [`Value::from_any`][crate::Value::from_any] has a shape that maps to
/// none of the six JSON variants, or contains such a value somewhere inside a container.
///
/// The error carries no path and no copy of the offending input. Enable `debug` level
/// `tracing` output to see where classification stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Error)]
#[error("unrecognized input shape")]
pub struct InitializationError;

/// The error type of the serde_json codec that encodes and decodes a `Value`.
pub type DecodeError = serde_json::Error;

/// Alias for a `Result` with the codec error type.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Reasons a string cannot be parsed into a [`KeyPath`][crate::KeyPath].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeyPathError {
    /// The path string is empty.
    #[error("key path is empty")]
    Empty,

    /// The segment at `index` is empty, as in `"a..b"`, `".a"` or `"a."`.
    #[error("key path segment {index} is empty")]
    EmptySegment { index: usize },
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(InitializationError.to_string(), "unrecognized input shape");
        assert_eq!(KeyPathError::Empty.to_string(), "key path is empty");
        assert_eq!(
            KeyPathError::EmptySegment { index: 2 }.to_string(),
            "key path segment 2 is empty"
        );
    }

    #[test]
    fn test_decode_error_passthrough() {
        let err: DecodeError = crate::from_str::<crate::Value>("{\"a\":").unwrap_err();
        assert!(err.is_eof());
        assert_eq!(err.line(), 1);
    }
}
