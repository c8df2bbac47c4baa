//! Building [`ToonValue`]s from any `T: Serialize`.
//!
//! [`ToonValueSerializer`] is a `serde::Serializer` whose output is a
//! [`ToonValue`] rather than text. The encoder then renders that value, so
//! serde types get exactly the same TOON as hand-built values.
//!
//! ```rust
//! use serde::Serialize;
//! use toon_codec::{to_string, to_value, ToonValue};
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let value = to_value(&Point { x: 1, y: 2 }).unwrap();
//! assert_eq!(value.get("x"), Some(&ToonValue::Int(1)));
//! assert_eq!(to_string(&Point { x: 1, y: 2 }).unwrap(), "x:1\ny:2\n");
//! ```
//!
//! Enum variants follow serde's externally tagged layout for unit and
//! newtype variants (`"Variant"` and `{Variant: value}`); tuple and struct
//! variants are not supported.

use crate::{Error, Result, ToonMap, ToonValue};
use serde::{ser, Serialize};

/// A serializer producing [`ToonValue`]s.
pub struct ToonValueSerializer;

pub struct SerializeVec {
    vec: Vec<ToonValue>,
}

pub struct SerializeMap {
    map: ToonMap,
    current_key: Option<String>,
}

impl ser::Serializer for ToonValueSerializer {
    type Ok = ToonValue;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = ser::Impossible<ToonValue, Error>;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = ser::Impossible<ToonValue, Error>;

    fn serialize_bool(self, v: bool) -> Result<ToonValue> {
        Ok(ToonValue::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<ToonValue> {
        Ok(ToonValue::Int(i64::from(v)))
    }

    fn serialize_i16(self, v: i16) -> Result<ToonValue> {
        Ok(ToonValue::Int(i64::from(v)))
    }

    fn serialize_i32(self, v: i32) -> Result<ToonValue> {
        Ok(ToonValue::Int(i64::from(v)))
    }

    fn serialize_i64(self, v: i64) -> Result<ToonValue> {
        Ok(ToonValue::Int(v))
    }

    fn serialize_u8(self, v: u8) -> Result<ToonValue> {
        Ok(ToonValue::Int(i64::from(v)))
    }

    fn serialize_u16(self, v: u16) -> Result<ToonValue> {
        Ok(ToonValue::Int(i64::from(v)))
    }

    fn serialize_u32(self, v: u32) -> Result<ToonValue> {
        Ok(ToonValue::Int(i64::from(v)))
    }

    fn serialize_u64(self, v: u64) -> Result<ToonValue> {
        match i64::try_from(v) {
            Ok(i) => Ok(ToonValue::Int(i)),
            Err(_) => Ok(ToonValue::Float(v as f64)),
        }
    }

    fn serialize_f32(self, v: f32) -> Result<ToonValue> {
        Ok(ToonValue::Float(f64::from(v)))
    }

    fn serialize_f64(self, v: f64) -> Result<ToonValue> {
        Ok(ToonValue::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<ToonValue> {
        Ok(ToonValue::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<ToonValue> {
        Ok(ToonValue::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<ToonValue> {
        Ok(ToonValue::List(
            v.iter().map(|&b| ToonValue::Int(i64::from(b))).collect(),
        ))
    }

    fn serialize_none(self) -> Result<ToonValue> {
        Ok(ToonValue::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<ToonValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<ToonValue> {
        Ok(ToonValue::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<ToonValue> {
        Ok(ToonValue::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<ToonValue> {
        Ok(ToonValue::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<ToonValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<ToonValue>
    where
        T: ?Sized + Serialize,
    {
        let mut map = ToonMap::with_capacity(1);
        map.insert(variant.to_string(), to_value(value)?);
        Ok(ToonValue::Object(map))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::custom(format!(
            "tuple variant `{}` cannot be represented in TOON",
            variant
        )))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len.unwrap_or(0)))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::custom(format!(
            "struct variant `{}` cannot be represented in TOON",
            variant
        )))
    }
}

impl SerializeVec {
    fn new(capacity: usize) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
        }
    }
}

impl SerializeMap {
    fn new(capacity: usize) -> Self {
        SerializeMap {
            map: ToonMap::with_capacity(capacity),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = ToonValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<ToonValue> {
        Ok(ToonValue::List(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = ToonValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<ToonValue> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = ToonValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<ToonValue> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = ToonValue;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_value(key)? {
            ToonValue::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            ToonValue::Int(i) => {
                self.current_key = Some(i.to_string());
                Ok(())
            }
            _ => Err(Error::custom("Map keys must be strings or integers")),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<ToonValue> {
        Ok(ToonValue::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = ToonValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<ToonValue> {
        Ok(ToonValue::Object(self.map))
    }
}

/// Converts any `T: Serialize` into a [`ToonValue`].
///
/// # Errors
///
/// Fails for map keys that are neither strings nor integers and for tuple or
/// struct enum variants.
pub fn to_value<T>(value: &T) -> Result<ToonValue>
where
    T: ?Sized + Serialize,
{
    value.serialize(ToonValueSerializer)
}
