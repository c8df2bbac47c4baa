//! Dynamic value representation for TOON data.
//!
//! [`ToonValue`] is the single tagged union every TOON document decodes into
//! and encodes from:
//!
//! - scalars: `Null`, `Bool`, `Int`, `Float`, `String`
//! - containers: `List`, `Table` (uniform records) and `Object` (ordered keys)
//!
//! ## Creating Values
//!
//! ```rust
//! use toon_codec::{toon, ToonValue};
//!
//! let null = ToonValue::Null;
//! let number = ToonValue::from(42);
//! let text = ToonValue::from("hello");
//!
//! let obj = toon!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! assert_eq!(obj.get("age"), Some(&ToonValue::Int(30)));
//! ```
//!
//! ## Extracting Values
//!
//! ```rust
//! use toon_codec::ToonValue;
//! use std::convert::TryFrom;
//!
//! let num: i64 = i64::try_from(ToonValue::from(42)).unwrap();
//! assert_eq!(num, 42);
//! ```
//!
//! ## Attaching TOON output to your own types
//!
//! Types that can describe themselves as a [`ToonValue`] implement
//! [`Serializable`] and get `to_toon` for free:
//!
//! ```rust
//! use toon_codec::{Serializable, ToonMap, ToonValue};
//!
//! struct Point { x: i64, y: i64 }
//!
//! impl Serializable for Point {
//!     fn to_value(&self) -> ToonValue {
//!         let mut map = ToonMap::new();
//!         map.insert("x".to_string(), self.x.into());
//!         map.insert("y".to_string(), self.y.into());
//!         ToonValue::Object(map)
//!     }
//! }
//!
//! assert_eq!(Point { x: 1, y: 2 }.to_toon(), "x:1\ny:2\n");
//! ```

use crate::scalar;
use crate::{Delimiter, Table, ToonMap, ToonOptions};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed representation of any TOON value.
///
/// # Examples
///
/// ```rust
/// use toon_codec::ToonValue;
///
/// let null = ToonValue::Null;
/// let num = ToonValue::Int(42);
/// let text = ToonValue::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_scalar());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ToonValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<ToonValue>),
    Table(Table),
    Object(ToonMap),
}

/// Returns `true` for `Null`, `Bool`, `Int`, `Float` and `String`.
#[inline]
#[must_use]
pub fn is_scalar(value: &ToonValue) -> bool {
    value.is_scalar()
}

/// Returns `true` if `key` can be written as a bare TOON key (`[A-Za-z0-9_]+`).
///
/// # Examples
///
/// ```rust
/// use toon_codec::is_valid_key;
///
/// assert!(is_valid_key("user_id2"));
/// assert!(!is_valid_key("user-id"));
/// assert!(!is_valid_key(""));
/// ```
#[must_use]
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

impl ToonValue {
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, ToonValue::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, ToonValue::Bool(_))
    }

    /// Returns `true` for `Int` and `Float`.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, ToonValue::Int(_) | ToonValue::Float(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, ToonValue::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, ToonValue::List(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_table(&self) -> bool {
        matches!(self, ToonValue::Table(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, ToonValue::Object(_))
    }

    /// Returns `true` for every variant that is written inline on one line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_codec::ToonValue;
    ///
    /// assert!(ToonValue::Null.is_scalar());
    /// assert!(ToonValue::from(1.5).is_scalar());
    /// assert!(!ToonValue::List(vec![]).is_scalar());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            ToonValue::Null
                | ToonValue::Bool(_)
                | ToonValue::Int(_)
                | ToonValue::Float(_)
                | ToonValue::String(_)
        )
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ToonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is an `Int`, returns it. Floats are not truncated.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ToonValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// If the value is numeric, returns it as an `f64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_codec::ToonValue;
    ///
    /// assert_eq!(ToonValue::Int(2).as_f64(), Some(2.0));
    /// assert_eq!(ToonValue::Float(-3.14).as_f64(), Some(-3.14));
    /// assert_eq!(ToonValue::from("2").as_f64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ToonValue::Int(i) => Some(*i as f64),
            ToonValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ToonValue::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&[ToonValue]> {
        match self {
            ToonValue::List(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            ToonValue::Table(table) => Some(table),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&ToonMap> {
        match self {
            ToonValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Looks up `key` if this value is an object.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ToonValue> {
        self.as_object().and_then(|obj| obj.get(key))
    }
}

impl fmt::Display for ToonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToonValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            ToonValue::Table(table) => {
                write!(f, "Table[{}]{{{}}}", table.len(), table.headers().join(","))
            }
            ToonValue::Object(obj) => {
                write!(f, "{{{}}}", obj.keys().cloned().collect::<Vec<_>>().join(","))
            }
            scalar => {
                let mut out = String::new();
                scalar::write_scalar(&mut out, scalar, Delimiter::Comma);
                f.write_str(&out)
            }
        }
    }
}

impl Serialize for ToonValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ToonValue::Null => serializer.serialize_unit(),
            ToonValue::Bool(b) => serializer.serialize_bool(*b),
            ToonValue::Int(i) => serializer.serialize_i64(*i),
            ToonValue::Float(f) => serializer.serialize_f64(*f),
            ToonValue::String(s) => serializer.serialize_str(s),
            ToonValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            ToonValue::Object(obj) => {
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            ToonValue::Table(table) => {
                let mut seq = serializer.serialize_seq(Some(table.len()))?;
                for row in table.rows() {
                    seq.serialize_element(&TableRow {
                        headers: table.headers(),
                        values: row,
                    })?;
                }
                seq.end()
            }
        }
    }
}

struct TableRow<'a> {
    headers: &'a [String],
    values: &'a [ToonValue],
}

impl Serialize for TableRow<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.headers.len()))?;
        for (k, v) in self.headers.iter().zip(self.values) {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ToonValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ToonValueVisitor;

        impl<'de> Visitor<'de> for ToonValueVisitor {
            type Value = ToonValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a null, bool, number, string, list or object")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(ToonValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(ToonValue::Int(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                match i64::try_from(value) {
                    Ok(i) => Ok(ToonValue::Int(i)),
                    Err(_) => Ok(ToonValue::Float(value as f64)),
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(ToonValue::Float(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(ToonValue::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(ToonValue::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(ToonValue::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(ToonValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(ToonValue::List(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = ToonMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(ToonValue::Object(values))
            }
        }

        deserializer.deserialize_any(ToonValueVisitor)
    }
}

/// A type that can describe itself as a [`ToonValue`].
///
/// Implement [`to_value`](Serializable::to_value); the encoding methods are
/// provided. Types that already implement `serde::Serialize` can use
/// [`crate::to_string`] instead.
pub trait Serializable {
    fn to_value(&self) -> ToonValue;

    /// Encodes `self` with default options.
    fn to_toon(&self) -> String {
        crate::encode(&self.to_value())
    }

    /// Encodes `self` with the given options.
    fn to_toon_with_options(&self, options: &ToonOptions) -> String {
        crate::encode_with_options(&self.to_value(), options)
    }
}

impl Serializable for ToonValue {
    fn to_value(&self) -> ToonValue {
        self.clone()
    }
}

impl Serializable for ToonMap {
    fn to_value(&self) -> ToonValue {
        ToonValue::Object(self.clone())
    }
}

impl Serializable for Table {
    fn to_value(&self) -> ToonValue {
        ToonValue::Table(self.clone())
    }
}

impl TryFrom<ToonValue> for i64 {
    type Error = crate::Error;

    fn try_from(value: ToonValue) -> crate::Result<Self> {
        match value {
            ToonValue::Int(i) => Ok(i),
            _ => Err(crate::Error::custom(format!(
                "expected integer, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<ToonValue> for f64 {
    type Error = crate::Error;

    fn try_from(value: ToonValue) -> crate::Result<Self> {
        match value {
            ToonValue::Int(i) => Ok(i as f64),
            ToonValue::Float(f) => Ok(f),
            _ => Err(crate::Error::custom(format!(
                "expected number, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<ToonValue> for bool {
    type Error = crate::Error;

    fn try_from(value: ToonValue) -> crate::Result<Self> {
        match value {
            ToonValue::Bool(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected bool, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<ToonValue> for String {
    type Error = crate::Error;

    fn try_from(value: ToonValue) -> crate::Result<Self> {
        match value {
            ToonValue::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {:?}",
                value
            ))),
        }
    }
}

impl From<bool> for ToonValue {
    fn from(value: bool) -> Self {
        ToonValue::Bool(value)
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ToonValue {
                fn from(value: $ty) -> Self {
                    ToonValue::Int(i64::from(value))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for ToonValue {
    fn from(value: f32) -> Self {
        ToonValue::Float(f64::from(value))
    }
}

impl From<f64> for ToonValue {
    fn from(value: f64) -> Self {
        ToonValue::Float(value)
    }
}

impl From<String> for ToonValue {
    fn from(value: String) -> Self {
        ToonValue::String(value)
    }
}

impl From<&str> for ToonValue {
    fn from(value: &str) -> Self {
        ToonValue::String(value.to_string())
    }
}

impl From<Vec<ToonValue>> for ToonValue {
    fn from(value: Vec<ToonValue>) -> Self {
        ToonValue::List(value)
    }
}

impl From<ToonMap> for ToonValue {
    fn from(value: ToonMap) -> Self {
        ToonValue::Object(value)
    }
}

impl From<Table> for ToonValue {
    fn from(value: Table) -> Self {
        ToonValue::Table(value)
    }
}

impl<T: Into<ToonValue>> From<Option<T>> for ToonValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ToonValue::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    #[test]
    fn test_tryfrom_i64() {
        assert_eq!(i64::try_from(ToonValue::Int(42)).unwrap(), 42);
        assert!(i64::try_from(ToonValue::Float(42.0)).is_err());
        assert!(i64::try_from(ToonValue::from("42")).is_err());
    }

    #[test]
    fn test_tryfrom_f64() {
        assert_eq!(f64::try_from(ToonValue::Float(3.5)).unwrap(), 3.5);
        assert_eq!(f64::try_from(ToonValue::Int(42)).unwrap(), 42.0);
        assert!(f64::try_from(ToonValue::Null).is_err());
    }

    #[test]
    fn test_tryfrom_bool_and_string() {
        assert!(bool::try_from(ToonValue::Bool(true)).unwrap());
        assert!(bool::try_from(ToonValue::Int(1)).is_err());
        assert_eq!(String::try_from(ToonValue::from("hi")).unwrap(), "hi");
        assert!(String::try_from(ToonValue::Int(1)).is_err());
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(ToonValue::from(true), ToonValue::Bool(true));
        assert_eq!(ToonValue::from(42u8), ToonValue::Int(42));
        assert_eq!(ToonValue::from(-7i64), ToonValue::Int(-7));
        assert_eq!(ToonValue::from(3.5f64), ToonValue::Float(3.5));
        assert_eq!(ToonValue::from(None::<i32>), ToonValue::Null);
        assert_eq!(ToonValue::from(Some("x")), ToonValue::String("x".into()));
    }

    #[test]
    fn test_scalar_predicate() {
        assert!(is_scalar(&ToonValue::String(String::new())));
        assert!(!is_scalar(&ToonValue::Object(ToonMap::new())));
        assert!(!is_scalar(&ToonValue::Table(Table::default())));
    }

    #[test]
    fn test_display_scalars_use_canonical_form() {
        assert_eq!(ToonValue::Null.to_string(), "null");
        assert_eq!(ToonValue::Float(2.0).to_string(), "2.0");
        assert_eq!(ToonValue::from("a,b").to_string(), "\"a,b\"");
        assert_eq!(ToonValue::from("plain").to_string(), "plain");
    }

    #[test]
    fn test_display_containers() {
        let list = ToonValue::List(vec![ToonValue::Int(1), ToonValue::from("x")]);
        assert_eq!(list.to_string(), "[1,x]");
        let table = Table::new(vec!["a".into(), "b".into()]);
        assert_eq!(ToonValue::Table(table).to_string(), "Table[0]{a,b}");
    }

    #[test]
    fn test_serializable_for_map() {
        let mut map = ToonMap::new();
        map.insert("k".to_string(), ToonValue::from("v"));
        assert_eq!(map.to_toon(), "k:v\n");
    }
}
