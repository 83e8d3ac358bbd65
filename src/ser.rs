//! Conversion from Rust data structures into [`Value`] trees.
//!
//! This module provides [`ValueSerializer`], a `serde::Serializer` whose
//! output is a [`Value`] rather than text. It powers [`to_value`] and the
//! generic `summarize` entry points: any `T: Serialize` is first expressed
//! in the summarizer's closed value model, then rendered.
//!
//! ## Conversion rules
//!
//! - integers and floats → [`Number`]; `u64` values above `i64::MAX` degrade
//!   to floats
//! - `None` and unit → [`Value::Null`] (serde has no undefined concept, so
//!   [`Value::Undefined`] is never produced here)
//! - bytes → array of integers
//! - unit enum variants → their name as a string
//! - data-carrying enum variants → a single-key object `{variant: payload}`
//! - map keys must be strings; anything else fails with
//!   [`Error::KeyMustBeString`]
//!
//! ## Usage
//!
//! ```rust
//! use serde_summary::{to_value, Value};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let value = to_value(&Point { x: 1, y: 2 }).unwrap();
//! assert!(value.is_object());
//! ```

use crate::{Error, Number, Result, SummaryMap, Value};
use serde::{ser, Serialize};

/// Serializer producing a [`Value`] tree instead of text.
///
/// Usually invoked through [`to_value`](crate::to_value); constructing it
/// directly is only useful when driving serde manually.
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeTupleVariant {
    variant: &'static str,
    vec: Vec<Value>,
}

pub struct SerializeMap {
    map: SummaryMap,
    current_key: Option<String>,
}

pub struct SerializeStructVariant {
    variant: &'static str,
    map: SummaryMap,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        if v <= i64::MAX as u64 {
            Ok(Value::Number(Number::Integer(v as i64)))
        } else {
            Ok(Value::Number(Number::Float(v as f64)))
        }
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Number(Number::Float(v as f64)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        let vec = v
            .iter()
            .map(|&b| Value::Number(Number::Integer(b as i64)))
            .collect();
        Ok(Value::Array(vec))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
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
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        let mut map = SummaryMap::with_capacity(1);
        map.insert(variant.to_string(), to_value(value)?);
        Ok(Value::Object(map))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple(self, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            variant,
            vec: Vec::new(),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            variant,
            map: SummaryMap::new(),
        })
    }
}

impl SerializeVec {
    fn new() -> Self {
        SerializeVec { vec: Vec::new() }
    }
}

impl SerializeMap {
    fn new() -> Self {
        SerializeMap {
            map: SummaryMap::new(),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut map = SummaryMap::with_capacity(1);
        map.insert(self.variant.to_string(), Value::Array(self.vec));
        Ok(Value::Object(map))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_value(key)? {
            Value::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            _ => Err(Error::KeyMustBeString),
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

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut map = SummaryMap::with_capacity(1);
        map.insert(self.variant.to_string(), Value::Object(self.map));
        Ok(Value::Object(map))
    }
}

fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}
