//! TOON decoding.
//!
//! [`decode`] turns TOON text into a [`ToonValue::Object`] in a single
//! forward pass over the document's lines. There is no recursion: open
//! objects live on an explicit stack of frames, each remembering the column
//! it was opened at and the key it will be stored under once it closes.
//!
//! ## Accepted forms
//!
//! ```text
//! # comment                  ignored, as are blank lines
//! key:value                  scalar assignment (a space after ':' is allowed)
//! key:                       nested object, children indented beneath
//! key[n]:                    flat list, next n lines are scalars
//! key[n]{f1,f2}:             flat table, next n lines are rows kept as text
//! [n]:                       nested list, replaces the enclosing `key:`
//! [n]{f1,f2}:                nested table, rows are type-coerced
//! ```
//!
//! ## Flat and nested tables
//!
//! Rows of a flat table are left as strings; rows of a nested table go
//! through scalar coercion:
//!
//! ```rust
//! use toon_codec::{decode, ToonValue};
//!
//! let flat = decode("users[1]{id,name}:\n  1,Ada\n").unwrap();
//! let row = flat.get("users").unwrap().as_table().unwrap().row(0).unwrap();
//! assert_eq!(row.get("id"), Some(&ToonValue::from("1")));
//!
//! let nested = decode("users:\n  [1]{id,name}:\n    1,Ada\n").unwrap();
//! let row = nested.get("users").unwrap().as_table().unwrap().row(0).unwrap();
//! assert_eq!(row.get("id"), Some(&ToonValue::Int(1)));
//! ```
//!
//! ## Leniency
//!
//! Array bodies are consumed strictly by their declared count and their
//! indentation is not checked. A body that runs out of lines stops early,
//! lines matching no form are skipped, and so are lines left indented beneath
//! an array once its body is read. These cases are logged at debug level and
//! become errors under [`DecodeOptions::strict`].

use crate::scalar::{self, coerce, raw_field, split_row};
use crate::{is_valid_key, DecodeOptions, Error, Result, Table, ToonMap, ToonValue};
use log::{debug, trace};

/// Decodes TOON text with default options.
///
/// The root is always an object; empty input yields an empty object.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{decode, ToonValue};
///
/// let value = decode("name: Alice\nscores:\n  [3]:\n    95\n    87\n    92\n").unwrap();
/// assert_eq!(value.get("name"), Some(&ToonValue::from("Alice")));
/// assert_eq!(value.get("scores").unwrap().as_list().unwrap().len(), 3);
///
/// assert_eq!(decode("").unwrap(), ToonValue::Object(Default::default()));
/// ```
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] when an array header has no enclosing key.
pub fn decode(text: &str) -> Result<ToonValue> {
    decode_with_options(text, &DecodeOptions::default())
}

/// Decodes TOON text with the given options.
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] when an array header has no enclosing
/// key and, in strict mode, [`Error::LengthMismatch`] or
/// [`Error::UnrecognizedLine`].
pub fn decode_with_options(text: &str, options: &DecodeOptions) -> Result<ToonValue> {
    Decoder::new(text, options).run()
}

/// One open object level.
struct Frame {
    /// Column of the line that opened the frame; `-1` for the root.
    indent: isize,
    /// Key in the parent frame; `None` only for the root.
    key: Option<String>,
    map: ToonMap,
}

/// A parsed `key[n]:`, `key[n]{f,..}:`, `[n]:` or `[n]{f,..}:` line.
struct Header<'a> {
    key: Option<&'a str>,
    count: usize,
    fields: Option<Vec<String>>,
    text: &'a str,
}

struct Decoder<'a> {
    lines: Vec<&'a str>,
    pos: usize,
    options: &'a DecodeOptions,
    stack: Vec<Frame>,
}

impl<'a> Decoder<'a> {
    fn new(text: &'a str, options: &'a DecodeOptions) -> Self {
        Decoder {
            // `lines` also strips the '\r' of "\r\n" endings
            lines: text.lines().collect(),
            pos: 0,
            options,
            stack: vec![Frame {
                indent: -1,
                key: None,
                map: ToonMap::new(),
            }],
        }
    }

    fn run(mut self) -> Result<ToonValue> {
        while self.pos < self.lines.len() {
            let raw = self.lines[self.pos];
            self.pos += 1;

            let content = raw.trim();
            if content.is_empty() || content.starts_with('#') {
                continue;
            }

            let indent = leading_spaces(raw) as isize;
            self.close_frames(indent);
            self.line(content, indent)?;
        }

        self.close_frames(-1);
        let root = self.stack.pop().map(|frame| frame.map).unwrap_or_default();
        Ok(ToonValue::Object(root))
    }

    fn line(&mut self, content: &'a str, indent: isize) -> Result<()> {
        let line_no = self.pos;
        let header = parse_header(content, self.options.delimiter.as_char());

        if let Some(header) = header {
            match header.key {
                Some(key) => self.flat_array(&header, key, line_no)?,
                None => self.nested_array(&header, line_no)?,
            }
            return self.skip_overflow(indent);
        }

        if let Some(key) = content.strip_suffix(':').filter(|k| is_valid_key(k)) {
            self.open_frame(key, indent);
            return Ok(());
        }

        if let Some((key, value)) = content.split_once(':') {
            if is_valid_key(key) {
                self.current().insert(key.to_string(), coerce(value.trim()));
                return Ok(());
            }
        }

        if self.options.strict {
            return Err(Error::unrecognized_line(line_no, content));
        }
        debug!("skipping unrecognized line {}: {:?}", line_no, content);
        Ok(())
    }

    /// `key[n]:` / `key[n]{..}:` store into the current container.
    fn flat_array(&mut self, header: &Header<'a>, key: &str, line_no: usize) -> Result<()> {
        let body = self.take_body(header, line_no)?;
        let value = match &header.fields {
            Some(fields) => ToonValue::Table(self.table(fields, &body, raw_field)),
            None => ToonValue::List(body.iter().map(|item| coerce(item)).collect()),
        };
        self.current().insert(key.to_string(), value);
        Ok(())
    }

    /// `[n]:` / `[n]{..}:` replace the active frame in its parent.
    fn nested_array(&mut self, header: &Header<'a>, line_no: usize) -> Result<()> {
        if self.stack.len() < 2 {
            return Err(Error::keyless_header(line_no, header.text));
        }

        let body = self.take_body(header, line_no)?;
        let value = match &header.fields {
            Some(fields) => ToonValue::Table(self.table(fields, &body, coerce)),
            None => ToonValue::List(body.iter().map(|item| coerce(item)).collect()),
        };

        if let Some(Frame { key: Some(key), .. }) = self.stack.pop() {
            trace!("closing `{}` with {} at line {}", key, header.text, line_no);
            self.current().insert(key, value);
        }
        Ok(())
    }

    fn table(&self, fields: &[String], body: &[&str], cell: fn(&str) -> ToonValue) -> Table {
        let delimiter = self.options.delimiter.as_char();
        let mut table = Table::new(fields.to_vec());
        for row in body {
            table.push_row(split_row(row, delimiter).into_iter().map(cell).collect());
        }
        table
    }

    /// Consumes up to `header.count` physical lines; blank ones yield nothing,
    /// except under an empty field list where every line is one empty row.
    fn take_body(&mut self, header: &Header<'_>, line_no: usize) -> Result<Vec<&'a str>> {
        let end = self.pos.saturating_add(header.count).min(self.lines.len());
        let keep_blank = header.fields.as_ref().is_some_and(Vec::is_empty);
        let body: Vec<&'a str> = self.lines[self.pos..end]
            .iter()
            .copied()
            .map(str::trim)
            .filter(|line| keep_blank || !line.is_empty())
            .collect();
        self.pos = end;

        if body.len() < header.count {
            if self.options.strict {
                return Err(Error::length_mismatch(
                    line_no,
                    header.text,
                    header.count,
                    body.len(),
                ));
            }
            debug!(
                "{} at line {} declares {} items, found {}",
                header.text,
                line_no,
                header.count,
                body.len()
            );
        }
        Ok(body)
    }

    /// Skips lines indented deeper than a finished array header at `indent`.
    ///
    /// They are the tail of a list element spanning several lines; reading
    /// them as entries would put them into the enclosing object.
    fn skip_overflow(&mut self, indent: isize) -> Result<()> {
        while let Some(&raw) = self.lines.get(self.pos) {
            let content = raw.trim();
            let blank = content.is_empty() || content.starts_with('#');
            if !blank && (leading_spaces(raw) as isize) <= indent {
                break;
            }
            self.pos += 1;
            if blank {
                continue;
            }
            if self.options.strict {
                return Err(Error::unrecognized_line(self.pos, content));
            }
            debug!("skipping line {} below a finished array: {:?}", self.pos, content);
        }
        Ok(())
    }

    fn open_frame(&mut self, key: &str, indent: isize) {
        // Placeholder keeps the key's position; it is overwritten on close.
        self.current()
            .insert(key.to_string(), ToonValue::Object(ToonMap::new()));
        trace!("open `{}` at column {}", key, indent);
        self.stack.push(Frame {
            indent,
            key: Some(key.to_string()),
            map: ToonMap::new(),
        });
    }

    /// Pops every frame opened at or right of `indent`, storing each in its parent.
    fn close_frames(&mut self, indent: isize) {
        while self.stack.len() > 1 && self.stack.last().is_some_and(|f| f.indent >= indent) {
            if let Some(Frame { key: Some(key), map, .. }) = self.stack.pop() {
                trace!("close `{}` with {} keys", key, map.len());
                self.current().insert(key, ToonValue::Object(map));
            }
        }
    }

    fn current(&mut self) -> &mut ToonMap {
        let last = self.stack.len() - 1;
        &mut self.stack[last].map
    }
}

fn leading_spaces(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b' ').count()
}

/// Parses an array header line.
///
/// Returns `None` when the line is not a header: no trailing `:`, no
/// brackets, a non-numeric count, an invalid key or junk after `]`.
fn parse_header(content: &str, delimiter: char) -> Option<Header<'_>> {
    let body = content.strip_suffix(':')?;
    let open = body.find('[')?;
    let key = &body[..open];
    if !key.is_empty() && !is_valid_key(key) {
        return None;
    }

    let rest = &body[open + 1..];
    let close = rest.find(']')?;
    let count_text = &rest[..close];
    if !scalar::is_int_literal(count_text) || count_text.starts_with('-') {
        return None;
    }
    let count = count_text.parse().ok()?;

    let tail = &rest[close + 1..];
    let fields = if tail.is_empty() {
        None
    } else {
        let inner = tail.strip_prefix('{')?.strip_suffix('}')?;
        Some(
            split_row(inner, delimiter)
                .into_iter()
                .filter(|field| !field.is_empty())
                .map(|field| scalar::unquote(field).unwrap_or_else(|| field.to_string()))
                .collect(),
        )
    };

    Some(Header {
        key: (!key.is_empty()).then_some(key),
        count,
        fields,
        text: content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{toon, Delimiter};

    #[test]
    fn test_parse_header_forms() {
        let h = parse_header("users[2]{id,name}:", ',').unwrap();
        assert_eq!(h.key, Some("users"));
        assert_eq!(h.count, 2);
        assert_eq!(h.fields, Some(vec!["id".to_string(), "name".to_string()]));

        let h = parse_header("[3]:", ',').unwrap();
        assert_eq!(h.key, None);
        assert_eq!(h.count, 3);
        assert!(h.fields.is_none());

        let h = parse_header("[1]{a|b}:", '|').unwrap();
        assert_eq!(h.fields, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_parse_header_rejects() {
        assert!(parse_header("key:", ',').is_none());
        assert!(parse_header("key[x]:", ',').is_none());
        assert!(parse_header("key[-1]:", ',').is_none());
        assert!(parse_header("bad-key[1]:", ',').is_none());
        assert!(parse_header("key[2]junk:", ',').is_none());
        assert!(parse_header("key[2]: a,b", ',').is_none());
    }

    #[test]
    fn test_frames_close_on_dedent() {
        let value = decode("a:\n  b:\n    c:1\n  d:2\ne:3\n").unwrap();
        assert_eq!(value, toon!({ "a": { "b": { "c": 1 }, "d": 2 }, "e": 3 }));
    }

    #[test]
    fn test_nested_list_closes_frame() {
        let value = decode("a:\n  [1]:\n    x\nb:y\n").unwrap();
        assert_eq!(value, toon!({ "a": ["x"], "b": "y" }));
    }

    #[test]
    fn test_placeholder_keeps_key_order() {
        let value = decode("first:\n  [1]:\n    1\nsecond:2\n").unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["first", "second"]);
    }

    #[test]
    fn test_empty_header_reads_blank_rows() {
        let value = decode("e:\n  [2]{}:\n\n\nnext:1\n").unwrap();
        let table = value.get("e").unwrap().as_table().unwrap();
        assert!(table.headers().is_empty());
        assert_eq!(table.len(), 2);
        assert_eq!(value.get("next"), Some(&toon!(1)));
    }

    #[test]
    fn test_overflow_below_array_is_skipped() {
        let value = decode("xs:\n  [1]:\n    a:\n      b:1\n    c:2\nnext:3\n").unwrap();
        assert_eq!(value, toon!({ "xs": ["a:"], "next": 3 }));

        let strict = DecodeOptions::new().strict(true);
        let err = decode_with_options("xs:\n  [1]:\n    a:\n      b:1\n", &strict).unwrap_err();
        assert_eq!(err.line(), Some(4));
    }

    #[test]
    fn test_pipe_rows() {
        let options = DecodeOptions::new().with_delimiter(Delimiter::Pipe);
        let value = decode_with_options("t:\n  [1]{a|b}:\n    1|x,y\n", &options).unwrap();
        let table = value.get("t").unwrap().as_table().unwrap();
        assert_eq!(table.rows()[0], vec![toon!(1), toon!("x,y")]);
    }
}
