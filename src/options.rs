//! Configuration options for TOON encoding and decoding.
//!
//! This module provides:
//!
//! - [`ToonOptions`]: encoder configuration (indent width, delimiter, tabular detection)
//! - [`DecodeOptions`]: decoder configuration (row delimiter, strict mode)
//! - [`Delimiter`]: field separator for tabular rows (comma, tab or pipe)
//!
//! ## Examples
//!
//! ```rust
//! use toon_codec::{encode_with_options, toon, Delimiter, ToonOptions};
//!
//! let data = toon!({ "rows": [{ "a": 1, "b": 2 }] });
//!
//! let options = ToonOptions::new().with_delimiter(Delimiter::Pipe);
//! let text = encode_with_options(&data, &options);
//! assert_eq!(text, "rows:\n  [1]{a|b}:\n    1|2\n");
//! ```

/// Field separator used for tabular rows.
///
/// # Examples
///
/// ```rust
/// use toon_codec::Delimiter;
///
/// assert_eq!(Delimiter::Comma.as_str(), ",");
/// assert_eq!(Delimiter::Tab.as_str(), "\t");
/// assert_eq!(Delimiter::Pipe.as_char(), '|');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
}

impl Delimiter {
    /// Returns the string representation of this delimiter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Tab => "\t",
            Delimiter::Pipe => "|",
        }
    }

    /// Returns the delimiter as a single character.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }
}

/// Default number of spaces per indentation level.
pub const DEFAULT_INDENT: usize = 2;

/// Configuration options for TOON encoding.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{ToonOptions, Delimiter};
///
/// let options = ToonOptions::new()
///     .with_indent(4)
///     .with_delimiter(Delimiter::Tab)
///     .with_compact_arrays(false);
/// assert_eq!(options.indent_width(), 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ToonOptions {
    /// Spaces per depth level. `0` falls back to [`DEFAULT_INDENT`].
    pub indent: usize,
    pub delimiter: Delimiter,
    /// Render uniform object lists as tables.
    pub compact_arrays: bool,
    /// Reserved for cosmetic spacing; output is currently identical either way.
    pub pretty: bool,
}

impl Default for ToonOptions {
    fn default() -> Self {
        ToonOptions {
            indent: DEFAULT_INDENT,
            delimiter: Delimiter::default(),
            compact_arrays: true,
            pretty: false,
        }
    }
}

impl ToonOptions {
    /// Creates default options (2-space indent, comma delimiter, tabular detection on).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_codec::ToonOptions;
    ///
    /// let options = ToonOptions::new();
    /// assert_eq!(options.indent, 2);
    /// assert!(options.compact_arrays);
    /// assert!(!options.pretty);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options with the `pretty` flag set.
    #[must_use]
    pub fn pretty() -> Self {
        ToonOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_codec::ToonOptions;
    ///
    /// assert_eq!(ToonOptions::new().with_indent(4).indent_width(), 4);
    /// assert_eq!(ToonOptions::new().with_indent(0).indent_width(), 2);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the delimiter for tabular rows.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enables or disables tabular-array detection.
    #[must_use]
    pub fn with_compact_arrays(mut self, compact_arrays: bool) -> Self {
        self.compact_arrays = compact_arrays;
        self
    }

    /// Sets the reserved `pretty` flag.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// The indent width actually used by the encoder.
    #[inline]
    #[must_use]
    pub fn indent_width(&self) -> usize {
        if self.indent == 0 {
            DEFAULT_INDENT
        } else {
            self.indent
        }
    }
}

/// Configuration options for TOON decoding.
///
/// The defaults reproduce the permissive contract of [`decode`](crate::decode).
///
/// # Examples
///
/// ```rust
/// use toon_codec::{decode_with_options, DecodeOptions, Delimiter, Error};
///
/// let options = DecodeOptions::new().with_delimiter(Delimiter::Pipe);
/// let value = decode_with_options("t:\n  [1]{a|b}:\n    1|x\n", &options).unwrap();
/// assert!(value.get("t").unwrap().is_table());
///
/// let strict = DecodeOptions::new().strict(true);
/// let err = decode_with_options("xs[3]:\n  1\n", &strict).unwrap_err();
/// assert!(matches!(err, Error::LengthMismatch { expected: 3, found: 1, .. }));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct DecodeOptions {
    pub delimiter: Delimiter,
    pub strict: bool,
}

impl DecodeOptions {
    /// Creates default options (comma rows, lenient).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the delimiter used to split tabular rows.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Turns short array bodies and unrecognized lines into errors.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
