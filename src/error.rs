//! Error types for TOON encoding and decoding.
//!
//! The default decoder is deliberately permissive: the only failure it reports
//! is an array header with no enclosing key ([`Error::MalformedInput`]).
//! Unmatched lines are ignored, short array bodies stop early and unknown
//! tokens degrade to strings.
//!
//! Opting into strict decoding (see [`DecodeOptions::strict`]) turns those
//! leniencies into [`Error::LengthMismatch`] and [`Error::UnrecognizedLine`].
//!
//! ## Examples
//!
//! ```rust
//! use toon_codec::{decode, Error};
//!
//! let err = decode("[3]:\n  a\n  b\n  c").unwrap_err();
//! assert!(matches!(err, Error::MalformedInput { line: 1, .. }));
//! assert!(err.to_string().contains("[3]:"));
//! ```
//!
//! [`DecodeOptions::strict`]: crate::DecodeOptions::strict

use std::fmt;
use thiserror::Error;

/// All errors produced by this crate.
///
/// Line numbers are 1-based and refer to physical lines of the decoded text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An array header appeared without an enclosing key.
    #[error("Malformed TOON input at line {line}: {message}")]
    MalformedInput { line: usize, message: String },

    /// Strict mode: a header declared more items than the document holds.
    #[error("Length mismatch at line {line}: header {header} declares {expected} items, found {found}")]
    LengthMismatch {
        line: usize,
        header: String,
        expected: usize,
        found: usize,
    },

    /// Strict mode: a line matched no header or key/value form.
    #[error("Unrecognized line {line}: {content}")]
    UnrecognizedLine { line: usize, content: String },

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error, mostly raised through the serde bridge
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a [`Error::MalformedInput`] for a bracketed header that has no key.
    ///
    /// The message names the offending header and the forms that would have
    /// been accepted in its place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_codec::Error;
    ///
    /// let err = Error::keyless_header(4, "[2]{id,name}:");
    /// assert!(err.to_string().contains("line 4"));
    /// assert!(err.to_string().contains("key:"));
    /// ```
    pub fn keyless_header(line: usize, header: &str) -> Self {
        let (count, rest) = match header.find(']') {
            Some(end) => (&header[..=end], &header[end + 1..]),
            None => (header, ""),
        };
        Error::MalformedInput {
            line,
            message: format!(
                "array header `{header}` has no enclosing key; expected a `key:` line above it \
                 with the header indented beneath, or the flat form `key{count}{rest}`"
            ),
        }
    }

    /// Creates a strict-mode length mismatch error.
    pub fn length_mismatch(line: usize, header: &str, expected: usize, found: usize) -> Self {
        Error::LengthMismatch {
            line,
            header: header.to_string(),
            expected,
            found,
        }
    }

    /// Creates a strict-mode error for a line that matches no known form.
    pub fn unrecognized_line(line: usize, content: &str) -> Self {
        Error::UnrecognizedLine {
            line,
            content: content.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_codec::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// The 1-based line this error points at, if it came from decoding.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::MalformedInput { line, .. }
            | Error::LengthMismatch { line, .. }
            | Error::UnrecognizedLine { line, .. } => Some(*line),
            Error::Io(_) | Error::Custom(_) => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyless_header_message() {
        let err = Error::keyless_header(1, "[3]:");
        let msg = err.to_string();
        assert!(msg.contains("line 1"));
        assert!(msg.contains("`[3]:`"));
        assert!(msg.contains("`key[3]:`"));
    }

    #[test]
    fn test_keyless_tabular_header_message() {
        let err = Error::keyless_header(2, "[2]{id,name}:");
        assert!(err.to_string().contains("`key[2]{id,name}:`"));
    }

    #[test]
    fn test_line_accessor() {
        assert_eq!(Error::unrecognized_line(7, "???").line(), Some(7));
        assert_eq!(Error::length_mismatch(3, "[4]:", 4, 2).line(), Some(3));
        assert_eq!(Error::custom("x").line(), None);
    }
}
