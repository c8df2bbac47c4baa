//! TOON encoding.
//!
//! [`encode`] walks a [`ToonValue`] depth-first and writes canonical TOON:
//!
//! - object keys in insertion order, scalars inline (`key:value`), containers
//!   on the following lines one level deeper
//! - lists of uniform scalar-field objects as tabular blocks (`[n]{f1,f2}:`)
//!   when [`ToonOptions::compact_arrays`] is on, every other list as a list
//!   block (`[n]:`) in which every element takes at least one line
//! - tables as tabular blocks, unless a cell holds a container
//! - every record terminated by `\n`
//!
//! ## Examples
//!
//! ```rust
//! use toon_codec::{encode, toon};
//!
//! let value = toon!({
//!     "name": "Alice",
//!     "tags": ["a", "b"],
//!     "users": [{ "id": 1, "name": "A" }, { "id": 2, "name": "B" }]
//! });
//!
//! assert_eq!(
//!     encode(&value),
//!     "name:Alice\ntags:\n  [2]:\n    a\n    b\nusers:\n  [2]{id,name}:\n    1,A\n    2,B\n"
//! );
//! ```

use crate::scalar::write_scalar;
use crate::{rows_share_header, Table, ToonMap, ToonOptions, ToonValue};
use log::debug;
use std::fmt::Write;

static NULL: ToonValue = ToonValue::Null;

/// Encodes a value with default options.
#[must_use]
pub fn encode(value: &ToonValue) -> String {
    encode_with_options(value, &ToonOptions::default())
}

/// Encodes a value with the given options.
///
/// Encoding is total: every [`ToonValue`] has a TOON rendering.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{encode_with_options, toon, ToonOptions};
///
/// let value = toon!({ "rows": [{ "a": 1 }, { "a": 2 }] });
///
/// let plain = ToonOptions::new().with_compact_arrays(false).with_indent(4);
/// assert_eq!(
///     encode_with_options(&value, &plain),
///     "rows:\n    [2]:\n        a:1\n        a:2\n"
/// );
/// ```
#[must_use]
pub fn encode_with_options(value: &ToonValue, options: &ToonOptions) -> String {
    let mut encoder = Encoder::new(options);
    encoder.value(value, 0);
    encoder.output
}

struct Encoder<'a> {
    output: String,
    options: &'a ToonOptions,
    /// `indents[d]` is the prefix for depth `d`.
    indents: Vec<String>,
}

impl<'a> Encoder<'a> {
    fn new(options: &'a ToonOptions) -> Self {
        Encoder {
            output: String::with_capacity(256),
            options,
            indents: vec![String::new()],
        }
    }

    fn indent(&mut self, depth: usize) {
        let width = self.options.indent_width();
        while self.indents.len() <= depth {
            let next = " ".repeat(self.indents.len() * width);
            self.indents.push(next);
        }
        self.output.push_str(&self.indents[depth]);
    }

    fn value(&mut self, value: &ToonValue, depth: usize) {
        match value {
            ToonValue::Object(map) => self.object(map, depth),
            ToonValue::List(items) => self.list(items, depth),
            ToonValue::Table(table) => self.table(table, depth),
            scalar => {
                self.indent(depth);
                write_scalar(&mut self.output, scalar, self.options.delimiter);
                self.output.push('\n');
            }
        }
    }

    fn object(&mut self, map: &ToonMap, depth: usize) {
        for (key, value) in map {
            self.indent(depth);
            self.output.push_str(key);
            self.output.push(':');
            if value.is_scalar() {
                write_scalar(&mut self.output, value, self.options.delimiter);
                self.output.push('\n');
            } else {
                self.output.push('\n');
                self.value(value, depth + 1);
            }
        }
    }

    fn list(&mut self, items: &[ToonValue], depth: usize) {
        if self.options.compact_arrays && rows_share_header(items) {
            let headers: Vec<String> = items[0]
                .as_object()
                .map(|first| first.keys().cloned().collect())
                .unwrap_or_default();
            let rows = items.iter().map(|item| {
                headers
                    .iter()
                    .map(move |h| item.get(h).unwrap_or(&NULL))
            });
            self.tabular(&headers, items.len(), rows, depth);
            return;
        }
        self.list_block(items, depth);
    }

    fn list_block(&mut self, items: &[ToonValue], depth: usize) {
        self.indent(depth);
        let _ = writeln!(self.output, "[{}]:", items.len());
        for item in items {
            match item {
                // The body is read by line count, so `{}` holds the empty object's line.
                ToonValue::Object(map) if map.is_empty() => {
                    self.indent(depth + 1);
                    self.output.push_str("{}\n");
                }
                _ => self.value(item, depth + 1),
            }
        }
    }

    fn table(&mut self, table: &Table, depth: usize) {
        if table.has_scalar_cells() {
            let rows = table.rows().iter().map(|row| row.iter());
            self.tabular(table.headers(), table.len(), rows, depth);
            return;
        }
        debug!(
            "table with header {:?} holds a container cell, writing a list block",
            table.headers()
        );
        self.list_block(&table.clone().into_objects(), depth);
    }

    fn tabular<'v, R, C>(&mut self, headers: &[String], len: usize, rows: R, depth: usize)
    where
        R: Iterator<Item = C>,
        C: Iterator<Item = &'v ToonValue>,
    {
        let delimiter = self.options.delimiter;
        self.indent(depth);
        let _ = write!(self.output, "[{}]{{", len);
        for (i, header) in headers.iter().enumerate() {
            if i > 0 {
                self.output.push_str(delimiter.as_str());
            }
            self.output.push_str(header);
        }
        self.output.push_str("}:\n");

        for row in rows {
            // A row of an empty header has no fields: a bare line break.
            if headers.is_empty() {
                self.output.push('\n');
                continue;
            }
            self.indent(depth + 1);
            for (i, cell) in row.enumerate() {
                if i > 0 {
                    self.output.push_str(delimiter.as_str());
                }
                write_scalar(&mut self.output, cell, delimiter);
            }
            self.output.push('\n');
        }
    }
}

impl Table {
    /// Encodes the table on its own as a root-level tabular block.
    ///
    /// A table with a container cell is written as a list block of its rows
    /// instead; see [`Table::has_scalar_cells`].
    #[must_use]
    pub fn to_block(&self, options: &ToonOptions) -> String {
        let mut encoder = Encoder::new(options);
        encoder.table(self, 0);
        encoder.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{toon, Delimiter};

    #[test]
    fn test_scalar_document() {
        assert_eq!(encode(&toon!(42)), "42\n");
        assert_eq!(encode(&toon!(null)), "null\n");
        assert_eq!(encode(&toon!("a,b")), "\"a,b\"\n");
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(encode(&toon!({})), "");
        assert_eq!(encode(&toon!({ "e": {} })), "e:\n");
        assert_eq!(encode(&toon!({ "e": [] })), "e:\n  [0]:\n");
    }

    #[test]
    fn test_indent_cache_grows() {
        let value = toon!({ "a": { "b": { "c": { "d": 1 } } } });
        let options = ToonOptions::new().with_indent(3);
        assert_eq!(
            encode_with_options(&value, &options),
            "a:\n   b:\n      c:\n         d:1\n"
        );
    }

    #[test]
    fn test_tab_delimiter_rows() {
        let value = toon!({ "t": [{ "a": "x y", "b": 2 }] });
        let options = ToonOptions::new().with_delimiter(Delimiter::Tab);
        assert_eq!(
            encode_with_options(&value, &options),
            "t:\n  [1]{a\tb}:\n    x y\t2\n"
        );
    }

    #[test]
    fn test_explicit_table_ignores_compact_flag() {
        let table = Table::from_rows(vec!["k".into()], vec![vec![toon!(true)]]);
        let options = ToonOptions::new().with_compact_arrays(false);
        assert_eq!(table.to_block(&options), "[1]{k}:\n  true\n");
    }

    #[test]
    fn test_empty_header_rows_are_bare_lines() {
        let table = Table::from_rows(Vec::new(), vec![Vec::new(), Vec::new()]);
        assert_eq!(table.to_block(&ToonOptions::default()), "[2]{}:\n\n\n");
    }

    #[test]
    fn test_container_cell_table_block() {
        let table = Table::from_rows(vec!["a".into()], vec![vec![toon!({ "x": 1 })]]);
        assert_eq!(
            table.to_block(&ToonOptions::default()),
            "[1]:\n  a:\n    x:1\n"
        );
    }

    #[test]
    fn test_pretty_is_reserved() {
        let value = toon!({ "a": 1, "b": [1, 2] });
        assert_eq!(
            encode_with_options(&value, &ToonOptions::pretty()),
            encode(&value)
        );
    }
}
