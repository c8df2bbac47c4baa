//! # toon_codec
//!
//! An encoder and decoder for TOON (Token-Oriented Object Notation), a compact,
//! indentation-based text format with the expressive power of JSON. Structure
//! comes from line breaks, indentation and short array headers (`[n]:`,
//! `[n]{f1,f2}:`) instead of braces and commas.
//!
//! ## The two directions
//!
//! - [`decode`] reads TOON text into a [`ToonValue`] tree whose root is always
//!   an object.
//! - [`encode`] writes any [`ToonValue`] back out as canonical TOON.
//!
//! ```rust
//! use toon_codec::{decode, encode, toon};
//!
//! let value = toon!({
//!     "name": "Alice",
//!     "users": [{ "id": 1, "role": "admin" }, { "id": 2, "role": "dev" }]
//! });
//!
//! let text = encode(&value);
//! assert_eq!(text, "name:Alice\nusers:\n  [2]{id,role}:\n    1,admin\n    2,dev\n");
//!
//! // Uniform object lists come back as tables.
//! let back = decode(&text).unwrap();
//! let users = back.get("users").unwrap().as_table().unwrap();
//! assert_eq!(users.headers(), ["id", "role"]);
//! ```
//!
//! ## serde
//!
//! Any `Serialize` type can be written through [`to_string`], and any
//! `DeserializeOwned` type read back with [`from_str`]:
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use toon_codec::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Product { id: u32, name: String, price: f64 }
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Catalog { products: Vec<Product> }
//!
//! let catalog = Catalog {
//!     products: vec![
//!         Product { id: 1, name: "Widget".into(), price: 9.99 },
//!         Product { id: 2, name: "Gadget".into(), price: 14.5 },
//!     ],
//! };
//!
//! let text = to_string(&catalog).unwrap();
//! assert_eq!(
//!     text,
//!     "products:\n  [2]{id,name,price}:\n    1,Widget,9.99\n    2,Gadget,14.5\n"
//! );
//! assert_eq!(from_str::<Catalog>(&text).unwrap(), catalog);
//! ```
//!
//! The accepted grammar is described in [`grammar`].

pub mod de;
pub mod decode;
pub mod encode;
pub mod error;
pub mod grammar;
pub mod macros;
pub mod map;
pub mod options;
mod scalar;
pub mod ser;
pub mod table;
pub mod value;

pub use de::{from_value, ValueDeserializer};
pub use decode::{decode, decode_with_options};
pub use encode::{encode, encode_with_options};
pub use error::{Error, Result};
pub use map::ToonMap;
pub use options::{DecodeOptions, Delimiter, ToonOptions, DEFAULT_INDENT};
pub use ser::{to_value, ToonValueSerializer};
pub use table::{rows_share_header, Table};
pub use value::{is_scalar, is_valid_key, Serializable, ToonValue};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// Serializes any `T: Serialize` to TOON text.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use toon_codec::to_string;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// assert_eq!(to_string(&Point { x: 1, y: -2 }).unwrap(), "x:1\ny:-2\n");
/// ```
///
/// # Errors
///
/// Returns an error if the value has no TOON representation (see [`to_value`]).
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &ToonOptions::default())
}

/// Serializes any `T: Serialize` to TOON text with custom options.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use toon_codec::{to_string_with_options, ToonOptions};
///
/// #[derive(Serialize)]
/// struct Inner { a: bool }
/// #[derive(Serialize)]
/// struct Outer { inner: Inner }
///
/// let options = ToonOptions::new().with_indent(4);
/// let text = to_string_with_options(&Outer { inner: Inner { a: true } }, &options).unwrap();
/// assert_eq!(text, "inner:\n    a:true\n");
/// ```
///
/// # Errors
///
/// Returns an error if the value has no TOON representation.
pub fn to_string_with_options<T>(value: &T, options: &ToonOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let value = to_value(value)?;
    Ok(encode_with_options(&value, options))
}

/// Writes any `T: Serialize` to a writer as TOON text.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{to_writer, toon};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &toon!({ "ok": true })).unwrap();
/// assert_eq!(buffer, b"ok:true\n");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, &ToonOptions::default())
}

/// Writes any `T: Serialize` to a writer as TOON text with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: &ToonOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))
}

/// Deserializes a `T` from TOON text.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use toon_codec::from_str;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x: 1\ny: 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the text cannot be decoded or does not match `T`.
pub fn from_str<T>(text: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_str_with_options(text, &DecodeOptions::default())
}

/// Deserializes a `T` from TOON text decoded with custom options.
///
/// Use this to read back text written with a non-default [`Delimiter`].
///
/// # Errors
///
/// Returns an error if the text cannot be decoded or does not match `T`.
pub fn from_str_with_options<T>(text: &str, options: &DecodeOptions) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(decode_with_options(text, options)?)
}

/// Deserializes a `T` from a reader producing TOON text.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use std::io::Cursor;
/// use toon_codec::from_reader;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_reader(Cursor::new(b"x:1\ny:2\n")).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the input is not UTF-8, or the text
/// does not match `T`.
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&text)
}
