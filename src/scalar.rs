//! The scalar grammar shared by the decoder and the encoder.
//!
//! Decoding side: [`coerce`] maps a bare token to a typed scalar, [`unquote`]
//! strips and unescapes a fully quoted token, [`split_row`] cuts a tabular
//! row into fields.
//!
//! Encoding side: [`write_scalar`] renders a scalar so that [`coerce`] reads
//! it back unchanged.

use crate::{Delimiter, ToonValue};
use std::fmt::Write;

/// Coerces a trimmed token into a scalar value.
///
/// `null`, `true`, `false`, a fully quoted string, `-?[0-9]+` (when it fits in
/// an `i64`) and `-?[0-9]+\.[0-9]+` are recognised; anything else is kept as a
/// raw string.
pub(crate) fn coerce(token: &str) -> ToonValue {
    match token {
        "null" => return ToonValue::Null,
        "true" => return ToonValue::Bool(true),
        "false" => return ToonValue::Bool(false),
        _ => {}
    }

    if let Some(text) = unquote(token) {
        return ToonValue::String(text);
    }

    if is_int_literal(token) {
        if let Ok(i) = token.parse::<i64>() {
            return ToonValue::Int(i);
        }
    } else if is_float_literal(token) {
        if let Ok(f) = token.parse::<f64>() {
            return ToonValue::Float(f);
        }
    }

    ToonValue::String(token.to_string())
}

/// Keeps a field as text: quoted fields are unescaped, everything else is raw.
pub(crate) fn raw_field(token: &str) -> ToonValue {
    ToonValue::String(unquote(token).unwrap_or_else(|| token.to_string()))
}

/// If `token` is wrapped in an unescaped pair of double quotes, returns the
/// unescaped contents.
///
/// Only `\"` and `\\` are escapes. Any other backslash pair is kept as
/// written, so `"C:\new"` decodes to a backslash followed by `n`.
pub(crate) fn unquote(token: &str) -> Option<String> {
    let inner = token.strip_prefix('"')?.strip_suffix('"')?;
    if ends_with_escape(inner) {
        return None;
    }
    Some(unescape(inner))
}

// An odd run of trailing backslashes escapes the closing quote.
fn ends_with_escape(s: &str) -> bool {
    s.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// `-?[0-9]+`
pub(crate) fn is_int_literal(s: &str) -> bool {
    is_digits(s.strip_prefix('-').unwrap_or(s))
}

/// `-?[0-9]+\.[0-9]+`
pub(crate) fn is_float_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    match unsigned.split_once('.') {
        Some((whole, frac)) => is_digits(whole) && is_digits(frac),
        None => false,
    }
}

/// Splits a tabular row on `delimiter`, honouring double-quoted spans.
///
/// Fields are trimmed but keep their quotes so the caller decides whether to
/// coerce or just unquote them.
pub(crate) fn split_row(line: &str, delimiter: char) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut escaped = false;

    for (i, ch) in line.char_indices() {
        if in_quotes {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_quotes = false;
            }
        } else if ch == '"' {
            in_quotes = true;
        } else if ch == delimiter {
            fields.push(line[start..i].trim());
            start = i + ch.len_utf8();
        }
    }
    fields.push(line[start..].trim());
    fields
}

/// Writes a scalar in canonical form. Containers are not scalars and write nothing.
pub(crate) fn write_scalar(out: &mut String, value: &ToonValue, delimiter: Delimiter) {
    match value {
        ToonValue::Null => out.push_str("null"),
        ToonValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        ToonValue::Int(i) => {
            let _ = write!(out, "{}", i);
        }
        ToonValue::Float(f) => write_float(out, *f),
        ToonValue::String(s) => write_string(out, s, delimiter),
        ToonValue::List(_) | ToonValue::Table(_) | ToonValue::Object(_) => {}
    }
}

// Always carries a '.', otherwise 2.0 would come back as Int(2). Non-finite
// values have no TOON literal and become null.
fn write_float(out: &mut String, f: f64) {
    if !f.is_finite() {
        out.push_str("null");
        return;
    }
    let text = f.to_string();
    out.push_str(&text);
    if !text.contains('.') {
        out.push_str(".0");
    }
}

// Multiline scalars have no TOON form: a line break inside a quoted string
// is written as a space so the record stays on one line.
fn write_string(out: &mut String, s: &str, delimiter: Delimiter) {
    if !needs_quotes(s, delimiter) {
        out.push_str(s);
        return;
    }
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\r' | '\n' => out.push(' '),
            _ => out.push(ch),
        }
    }
    out.push('"');
}

/// Returns `true` if `s` must be quoted to survive a decode unchanged.
pub(crate) fn needs_quotes(s: &str, delimiter: Delimiter) -> bool {
    if s.is_empty() {
        return true;
    }

    if s.contains(|c: char| matches!(c, ',' | ':' | '\n' | '\r' | '{' | '}' | '[' | ']'))
        || s.contains(delimiter.as_char())
    {
        return true;
    }

    if s.starts_with(char::is_whitespace) || s.ends_with(char::is_whitespace) {
        return true;
    }

    if s.contains('"') || s.starts_with('#') {
        return true;
    }

    matches!(s, "null" | "true" | "false") || is_int_literal(s) || is_float_literal(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_literals() {
        assert_eq!(coerce("null"), ToonValue::Null);
        assert_eq!(coerce("true"), ToonValue::Bool(true));
        assert_eq!(coerce("false"), ToonValue::Bool(false));
        assert_eq!(coerce("42"), ToonValue::Int(42));
        assert_eq!(coerce("-3.14"), ToonValue::Float(-3.14));
        assert_eq!(coerce("hello"), ToonValue::String("hello".into()));
    }

    #[test]
    fn test_coerce_near_numbers_stay_strings() {
        assert_eq!(coerce("1."), ToonValue::String("1.".into()));
        assert_eq!(coerce(".5"), ToonValue::String(".5".into()));
        assert_eq!(coerce("1e5"), ToonValue::String("1e5".into()));
        assert_eq!(coerce("1.2.3"), ToonValue::String("1.2.3".into()));
        assert_eq!(coerce("-"), ToonValue::String("-".into()));
        assert_eq!(coerce("NULL"), ToonValue::String("NULL".into()));
    }

    #[test]
    fn test_coerce_int_overflow_is_string() {
        let big = "99999999999999999999";
        assert_eq!(coerce(big), ToonValue::String(big.into()));
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("\"a,b\""), Some("a,b".to_string()));
        assert_eq!(unquote(r#""say \"hi\"""#), Some("say \"hi\"".to_string()));
        assert_eq!(unquote(r#""back\\slash""#), Some("back\\slash".to_string()));
        assert_eq!(unquote(r#""C:\new""#), Some("C:\\new".to_string()));
        assert_eq!(unquote(r#""\r\t\d""#), Some("\\r\\t\\d".to_string()));
        assert_eq!(unquote("\""), None);
        assert_eq!(unquote(r#""open\""#), None);
        assert_eq!(unquote("bare"), None);
    }

    #[test]
    fn test_quoted_number_stays_string() {
        assert_eq!(coerce("\"42\""), ToonValue::String("42".into()));
    }

    #[test]
    fn test_split_row() {
        assert_eq!(split_row("1, Alice ,x", ','), vec!["1", "Alice", "x"]);
        assert_eq!(split_row(r#"1,"a,b",c"#, ','), vec!["1", "\"a,b\"", "c"]);
        assert_eq!(
            split_row(r#""q\",x",y"#, ','),
            vec![r#""q\",x""#, "y"]
        );
        assert_eq!(split_row("a|b,c", '|'), vec!["a", "b,c"]);
        assert_eq!(split_row("", ','), vec![""]);
    }

    #[test]
    fn test_needs_quotes() {
        for s in [
            "", "a,b", "k:v", "[x]", "{y}", "null", "true", "12", "-1.5", " pad", "#tag", "say \"hi\"",
        ] {
            assert!(needs_quotes(s, Delimiter::Comma), "{s:?} should be quoted");
        }
        for s in ["hello", "hello world", "a-b", "1.", "café", "a#b"] {
            assert!(!needs_quotes(s, Delimiter::Comma), "{s:?} should stay bare");
        }
        assert!(needs_quotes("a|b", Delimiter::Pipe));
        assert!(!needs_quotes("a|b", Delimiter::Comma));
    }

    #[test]
    fn test_write_float() {
        let mut out = String::new();
        write_scalar(&mut out, &ToonValue::Float(2.0), Delimiter::Comma);
        assert_eq!(out, "2.0");

        out.clear();
        write_scalar(&mut out, &ToonValue::Float(-0.5), Delimiter::Comma);
        assert_eq!(out, "-0.5");

        out.clear();
        write_scalar(&mut out, &ToonValue::Float(f64::NAN), Delimiter::Comma);
        assert_eq!(out, "null");
    }

    #[test]
    fn test_write_string_escapes() {
        let mut out = String::new();
        write_scalar(&mut out, &ToonValue::from("a\\b,\"c\"\\n"), Delimiter::Comma);
        assert_eq!(out, r#""a\\b,\"c\"\\n""#);
        assert_eq!(coerce(&out), ToonValue::from("a\\b,\"c\"\\n"));
    }

    #[test]
    fn test_line_breaks_stay_on_one_line() {
        let mut out = String::new();
        write_scalar(&mut out, &ToonValue::from("a\r\nb\nc"), Delimiter::Comma);
        assert_eq!(out, "\"a  b c\"");
        assert!(!out.contains(['\n', '\r']));
    }
}
