//! The TOON dialect read and written by this crate.
//!
//! This module holds no code; it documents the line grammar shared by
//! [`decode`](crate::decode) and [`encode`](crate::encode).
//!
//! # Documents
//!
//! A document is a sequence of physical lines. `\n` and `\r\n` endings are
//! both accepted. Indentation is counted in leading spaces only; tabs are
//! not indentation. Blank lines and lines whose first non-space character
//! is `#` are ignored everywhere except inside an array body, where a blank
//! line still counts towards the declared length.
//!
//! The root of every decoded document is an object. An empty document is an
//! empty object.
//!
//! # Lines
//!
//! | Form | Meaning |
//! |------|---------|
//! | `key:value` | scalar assignment, optional spaces after `:` |
//! | `key:` | nested object; its entries are indented deeper |
//! | `key[n]:` | flat list; the next `n` lines are scalars |
//! | `key[n]{f1,f2}:` | flat table; the next `n` lines are rows of text |
//! | `[n]:` | nested list, replacing the object opened by the `key:` above it |
//! | `[n]{f1,f2}:` | nested table, replacing the object opened by the `key:` above it |
//!
//! Keys match `[A-Za-z0-9_]+`. `n` is a run of decimal digits. Field names
//! in a header are separated by the active [`Delimiter`](crate::Delimiter).
//!
//! A bracketed header with no key that is not beneath a `key:` line is an
//! error ([`Error::MalformedInput`](crate::Error::MalformedInput)).
//!
//! ```text
//! name: Alice
//! address:
//!   city: Paris
//!   zip: "75001"
//! tags[2]:
//!   admin
//!   ops
//! users:
//!   [2]{id,name}:
//!     1,Ada
//!     2,"Lovelace, Ada"
//! ```
//!
//! # Scalars
//!
//! | Token | Value |
//! |-------|-------|
//! | `null` | `Null` |
//! | `true`, `false` | `Bool` |
//! | `-?[0-9]+` fitting in an `i64` | `Int` |
//! | `-?[0-9]+\.[0-9]+` | `Float` |
//! | `"..."` | `String`, unescaped |
//! | anything else | `String`, as written |
//!
//! Inside quotes, `\"` and `\\` are the only escapes. Any other backslash
//! pair is kept as written, so `"C:\new"` is `C:` followed by a backslash
//! and `new`. Quoted tokens are never coerced, so `"42"` is
//! the string `42`.
//!
//! Rows of a flat table are split and unquoted but not coerced: every cell
//! is a `String`. Rows of a nested table and items of either list form are
//! coerced. A header with no fields, `[n]{}:`, reads each of its `n` lines
//! as one empty row.
//!
//! Lines after a body that are indented deeper than the header belong to an
//! element spanning several lines and are skipped.
//!
//! # Canonical output
//!
//! The encoder only writes nested headers, never the flat forms. It writes
//! no space after `:`, ends every line with `\n`, and quotes a string
//! whenever writing it bare would decode to something else: empty text,
//! reserved words, number-like text, surrounding whitespace, a leading `#`,
//! any `"`, the active delimiter, one of `, : { } [ ]` or a line break.
//! Multiline strings have no form of their own: a line break inside quotes
//! is written as a space. Floats always carry a `.`; non-finite floats are
//! written as `null`.
//!
//! A list of empty objects is written as `[n]{}:` with one blank row per
//! element. An empty object inside a list block is written as `{}`. A
//! [`Table`](crate::Table) holding a container cell is written as a list
//! block of its rows.
