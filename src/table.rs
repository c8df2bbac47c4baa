//! Uniform record arrays.
//!
//! A [`Table`] is the value behind a TOON tabular block:
//!
//! ```text
//! users:
//!   [2]{id,name}:
//!     1,Alice
//!     2,Bob
//! ```
//!
//! Rows are stored positionally against a single header list, so every row
//! reports exactly the same ordered field set. [`Table::push_row`] pads short
//! rows with `null` and drops surplus fields to keep it that way.

use crate::{ToonMap, ToonValue};

/// An ordered list of records sharing one header.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{Table, ToonValue};
///
/// let mut table = Table::new(vec!["id".to_string(), "name".to_string()]);
/// table.push_row(vec![ToonValue::from(1), ToonValue::from("Alice")]);
/// table.push_row(vec![ToonValue::from(2)]);
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.rows()[1][1], ToonValue::Null);
///
/// let first = table.row(0).unwrap();
/// assert_eq!(first.get("name").and_then(|v| v.as_str()), Some("Alice"));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<ToonValue>>,
}

impl Table {
    /// Creates an empty table with the given header.
    #[must_use]
    pub fn new(headers: Vec<String>) -> Self {
        Table {
            headers,
            rows: Vec::new(),
        }
    }

    /// Creates a table from a header and positional rows.
    #[must_use]
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<ToonValue>>) -> Self {
        let mut table = Table::new(headers);
        for row in rows {
            table.push_row(row);
        }
        table
    }

    /// Builds a table from a list of objects if they qualify as one.
    ///
    /// The header follows the first object's key order; the remaining objects
    /// may list the same keys in any order. Returns `None` when
    /// [`rows_share_header`] is false.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_codec::{toon, Table};
    ///
    /// let rows = toon!([{ "b": 1, "a": 2 }, { "a": 3, "b": 4 }]);
    /// let table = Table::from_objects(rows.as_list().unwrap()).unwrap();
    /// assert_eq!(table.headers(), ["b", "a"]);
    /// assert_eq!(table.rows()[1], vec![toon!(4), toon!(3)]);
    /// ```
    #[must_use]
    pub fn from_objects(rows: &[ToonValue]) -> Option<Self> {
        if !rows_share_header(rows) {
            return None;
        }
        let headers: Vec<String> = rows[0].as_object()?.keys().cloned().collect();
        let mut table = Table::new(headers);
        for row in rows {
            let obj = row.as_object()?;
            let values = table
                .headers
                .iter()
                .map(|key| obj.get(key).cloned().unwrap_or(ToonValue::Null))
                .collect();
            table.rows.push(values);
        }
        Some(table)
    }

    /// Appends a row, padding with `null` or truncating to the header width.
    pub fn push_row(&mut self, mut row: Vec<ToonValue>) {
        row.resize(self.headers.len(), ToonValue::Null);
        self.rows.push(row);
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<ToonValue>] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns row `index` as an ordered field-name to value mapping.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<ToonMap> {
        self.rows.get(index).map(|row| self.zip_row(row))
    }

    /// Iterates over every row as an ordered mapping.
    pub fn objects(&self) -> impl Iterator<Item = ToonMap> + '_ {
        self.rows.iter().map(move |row| self.zip_row(row))
    }

    /// Consumes the table, returning each row as a [`ToonValue::Object`].
    #[must_use]
    pub fn into_objects(self) -> Vec<ToonValue> {
        let headers = self.headers;
        self.rows
            .into_iter()
            .map(|row| ToonValue::Object(headers.iter().cloned().zip(row).collect()))
            .collect()
    }

    /// Returns `true` when no cell holds a list, table or object.
    ///
    /// Only such tables fit a tabular block; the encoder writes any other
    /// table as a list block of its rows.
    #[must_use]
    pub fn has_scalar_cells(&self) -> bool {
        self.rows.iter().flatten().all(ToonValue::is_scalar)
    }

    fn zip_row(&self, row: &[ToonValue]) -> ToonMap {
        self.headers.iter().cloned().zip(row.iter().cloned()).collect()
    }
}

/// Returns `true` if `rows` can be rendered as one tabular block.
///
/// That holds when the slice is non-empty, every element is an object, all
/// objects have the same key set (in any order) and every field holds a
/// scalar. A list of empty objects qualifies with an empty header.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{rows_share_header, toon};
///
/// let uniform = toon!([{ "id": 1, "ok": true }, { "ok": false, "id": 2 }]);
/// assert!(rows_share_header(uniform.as_list().unwrap()));
///
/// let ragged = toon!([{ "id": 1 }, { "id": 2, "extra": null }]);
/// assert!(!rows_share_header(ragged.as_list().unwrap()));
/// ```
#[must_use]
pub fn rows_share_header(rows: &[ToonValue]) -> bool {
    let Some(first) = rows.first().and_then(ToonValue::as_object) else {
        return false;
    };

    rows.iter().all(|row| match row.as_object() {
        Some(obj) => obj.same_keys(first) && obj.values().all(ToonValue::is_scalar),
        None => false,
    })
}
