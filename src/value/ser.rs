use std::fmt::Display;

use faststr::FastStr;
use serde::{
    de::Unexpected,
    ser::{Error as _, Impossible, Serialize, SerializeMap as _, SerializeSeq as _},
};

use super::{array::Array, object::Map, object::Object};
use crate::{config::SerializeCfg, error::Result, value::node::Value, DecodeError as Error};

// Integers up to 2^53 are exact in an `f64`, and are written without a fraction.
const MAX_SAFE_INTEGER: f64 = 9007199254740992.0;

impl Serialize for Value {
    /// Encodes the value as JSON.
    ///
    /// An integral number within 2^53 is written as an integer, so `1.0` encodes as `1`.
    /// NaN and infinity have no JSON form and encode as `null`. Object keys come out in
    /// map order unless the `sort_keys` feature is enabled.
    #[inline]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        SerializeValue::new(self, SerializeCfg::default()).serialize(serializer)
    }
}

impl Serialize for Array {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self)
    }
}

impl Serialize for Object {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let cfg = SerializeCfg::default();
        let mut map = serializer.serialize_map(Some(self.len()))?;
        if cfg.sort_map_keys {
            for (k, v) in self.sorted_entries() {
                map.serialize_entry(k.as_str(), v)?;
            }
        } else {
            for (k, v) in self {
                map.serialize_entry(k, v)?;
            }
        }
        map.end()
    }
}

/// Serializes a borrowed `Value` with explicit encoding options.
pub(crate) struct SerializeValue<'a> {
    value: &'a Value,
    cfg: SerializeCfg,
}

impl<'a> SerializeValue<'a> {
    #[inline]
    pub(crate) fn new(value: &'a Value, cfg: SerializeCfg) -> Self {
        Self { value, cfg }
    }

    #[inline]
    fn child(&self, value: &'a Value) -> Self {
        Self {
            value,
            cfg: self.cfg,
        }
    }
}

impl Serialize for SerializeValue<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self.value {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serialize_number(*n, serializer),
            Value::String(s) => serializer.serialize_str(s.as_str()),
            Value::Array(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for v in arr {
                    seq.serialize_element(&self.child(v))?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                if self.cfg.sort_map_keys {
                    for (k, v) in obj.sorted_entries() {
                        map.serialize_entry(k.as_str(), &self.child(v))?;
                    }
                } else {
                    for (k, v) in obj {
                        map.serialize_entry(k, &self.child(v))?;
                    }
                }
                map.end()
            }
        }
    }
}

#[inline]
fn serialize_number<S>(n: f64, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    if n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER {
        serializer.serialize_i64(n as i64)
    } else {
        // serde_json writes a non-finite float as `null`
        serializer.serialize_f64(n)
    }
}

/// Convert a `T` into `generic_json::Value` which can represent any valid JSON data.
///
/// # Example
///
/// ```
/// use serde::Serialize;
/// use generic_json::{json, to_value, Value};
///
/// #[derive(Serialize, Debug)]
/// struct User {
///     string: String,
///     number: i32,
///     array: Vec<String>,
/// }
///
///  let user = User{
///      string: "hello".into(),
///      number: 123,
///      array: vec!["a".into(), "b".into(), "c".into()],
///  };
///  let got: Value = generic_json::to_value(&user).unwrap();
///  let expect = json!({
///      "string": "hello",
///      "number": 123,
///      "array": ["a", "b", "c"],
///  });
///  assert_eq!(got, expect);
/// ```
///
/// # Errors
///
/// This conversion can fail if `T`'s implementation of `Serialize` decides to
/// fail, if `T` contains a map with non-string keys, or an integer beyond the `i64`
/// and `u64` ranges.
///
/// ```
/// use std::collections::BTreeMap;
///
/// use generic_json::to_value;
///
/// // The keys in this map are vectors, not strings.
/// let mut map = BTreeMap::new();
/// map.insert(vec![32, 64], "x86");
/// let err = to_value(&map).unwrap_err().to_string();
/// assert!(err.contains("expected the map key to be a string, bool or number"));
/// ```
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(Serializer)
}

// Not exported, mainly used in `json!`.
pub(crate) struct Serializer;

impl serde::Serializer for Serializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeStructVariant;

    #[inline]
    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::new_null())
    }

    #[inline]
    fn serialize_bool(self, value: bool) -> Result<Value> {
        Ok(Value::new_bool(value))
    }

    #[inline]
    fn serialize_i8(self, value: i8) -> Result<Value> {
        self.serialize_i64(value as i64)
    }

    #[inline]
    fn serialize_i16(self, value: i16) -> Result<Value> {
        self.serialize_i64(value as i64)
    }

    #[inline]
    fn serialize_i32(self, value: i32) -> Result<Value> {
        self.serialize_i64(value as i64)
    }

    #[inline]
    fn serialize_i64(self, value: i64) -> Result<Value> {
        Ok(Value::new_i64(value))
    }

    fn serialize_i128(self, value: i128) -> Result<Value> {
        if let Ok(value) = i64::try_from(value) {
            Ok(Value::new_i64(value))
        } else if let Ok(value) = u64::try_from(value) {
            Ok(Value::new_u64(value))
        } else {
            Ok(Value::new_f64(value as f64))
        }
    }

    #[inline]
    fn serialize_u8(self, value: u8) -> Result<Value> {
        self.serialize_u64(value as u64)
    }

    #[inline]
    fn serialize_u16(self, value: u16) -> Result<Value> {
        self.serialize_u64(value as u64)
    }

    #[inline]
    fn serialize_u32(self, value: u32) -> Result<Value> {
        self.serialize_u64(value as u64)
    }

    #[inline]
    fn serialize_u64(self, value: u64) -> Result<Value> {
        Ok(Value::new_u64(value))
    }

    fn serialize_u128(self, value: u128) -> Result<Value> {
        if let Ok(value) = u64::try_from(value) {
            Ok(Value::new_u64(value))
        } else {
            Ok(Value::new_f64(value as f64))
        }
    }

    #[inline]
    fn serialize_f32(self, value: f32) -> Result<Value> {
        self.serialize_f64(value as f64)
    }

    #[inline]
    fn serialize_f64(self, value: f64) -> Result<Value> {
        if value.is_finite() {
            Ok(Value::new_f64(value))
        } else {
            Ok(Value::new_null())
        }
    }

    #[inline]
    fn serialize_char(self, value: char) -> Result<Value> {
        Ok(Value::from(value))
    }

    #[inline]
    fn serialize_str(self, value: &str) -> Result<Value> {
        Ok(Value::new_str(value))
    }

    // bytes become an array of numbers
    fn serialize_bytes(self, value: &[u8]) -> Result<Value> {
        Ok(Value::Array(value.iter().copied().collect()))
    }

    #[inline]
    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        self.serialize_unit()
    }

    #[inline]
    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::from_static_str(variant))
    }

    #[inline]
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
        Ok(tagged(variant, to_value(value)?))
    }

    #[inline]
    fn serialize_none(self) -> Result<Value> {
        self.serialize_unit()
    }

    #[inline]
    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    #[inline]
    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(SerializeVec {
            vec: Vec::with_capacity(len.unwrap_or_default()),
        })
    }

    #[inline]
    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        self.serialize_seq(Some(len))
    }

    #[inline]
    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_seq(Some(len))
    }

    #[inline]
    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            static_name: variant,
            vec: Vec::with_capacity(len),
        })
    }

    #[inline]
    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(SerializeMap {
            map: Map::with_capacity_and_hasher(len.unwrap_or_default(), Default::default()),
            next_key: None,
        })
    }

    #[inline]
    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        self.serialize_map(Some(len))
    }

    #[inline]
    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Ok(SerializeStructVariant {
            static_name: variant,
            map: Map::with_capacity_and_hasher(len, Default::default()),
        })
    }

    #[inline]
    fn collect_str<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Display,
    {
        self.serialize_str(&value.to_string())
    }
}

/// An externally tagged enum variant: `{"variant": value}`.
fn tagged(variant: &'static str, value: Value) -> Value {
    let mut map = Map::with_capacity_and_hasher(1, Default::default());
    map.insert(FastStr::from_static_str(variant), value);
    Value::Object(Object(map))
}

fn key_must_be_str_or_num(unexp: Unexpected) -> Error {
    Error::custom(format_args!(
        "expected the map key to be a string, bool or number, got {unexp}"
    ))
}

/// Serializing Rust seq into `Value`.
pub(crate) struct SerializeVec {
    vec: Vec<Value>,
}

/// Serializing Rust tuple variant into `Value`.
pub(crate) struct SerializeTupleVariant {
    static_name: &'static str,
    vec: Vec<Value>,
}

/// Serializing Rust map or struct into `Value`.
pub(crate) struct SerializeMap {
    map: Map,
    next_key: Option<FastStr>,
}

/// Serializing Rust struct variant into `Value`.
pub(crate) struct SerializeStructVariant {
    static_name: &'static str,
    map: Map,
}

impl serde::ser::SerializeSeq for SerializeVec {
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
        Ok(Value::Array(Array(self.vec)))
    }
}

impl serde::ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        serde::ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        serde::ser::SerializeSeq::end(self)
    }
}

impl serde::ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        serde::ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        serde::ser::SerializeSeq::end(self)
    }
}

impl serde::ser::SerializeTupleVariant for SerializeTupleVariant {
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
        Ok(tagged(self.static_name, Value::Array(Array(self.vec))))
    }
}

impl serde::ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.next_key = Some(key.serialize(MapKeySerializer)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let Some(key) = self.next_key.take() else {
            return Err(Error::custom("serialize_value called before serialize_key"));
        };
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(Object(self.map)))
    }
}

impl serde::ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        serde::ser::SerializeMap::serialize_entry(self, key, value)
    }

    fn end(self) -> Result<Value> {
        serde::ser::SerializeMap::end(self)
    }
}

impl serde::ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(FastStr::from_static_str(key), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(tagged(self.static_name, Value::Object(Object(self.map))))
    }
}

// Serialize the map key into a string.
struct MapKeySerializer;

fn float_key_must_be_finite() -> Error {
    Error::custom("float key must be finite (got NaN or +/-inf)")
}

impl serde::Serializer for MapKeySerializer {
    type Ok = FastStr;
    type Error = Error;

    type SerializeSeq = Impossible<FastStr, Error>;
    type SerializeTuple = Impossible<FastStr, Error>;
    type SerializeTupleStruct = Impossible<FastStr, Error>;
    type SerializeTupleVariant = Impossible<FastStr, Error>;
    type SerializeMap = Impossible<FastStr, Error>;
    type SerializeStruct = Impossible<FastStr, Error>;
    type SerializeStructVariant = Impossible<FastStr, Error>;

    #[inline]
    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<FastStr> {
        Ok(FastStr::from_static_str(variant))
    }

    #[inline]
    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<FastStr>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_bool(self, value: bool) -> Result<FastStr> {
        if value {
            Ok(FastStr::from_static_str("true"))
        } else {
            Ok(FastStr::from_static_str("false"))
        }
    }

    fn serialize_i8(self, value: i8) -> Result<FastStr> {
        self.serialize_i64(value as i64)
    }

    fn serialize_i16(self, value: i16) -> Result<FastStr> {
        self.serialize_i64(value as i64)
    }

    fn serialize_i32(self, value: i32) -> Result<FastStr> {
        self.serialize_i64(value as i64)
    }

    fn serialize_i64(self, value: i64) -> Result<FastStr> {
        self.serialize_str(itoa::Buffer::new().format(value))
    }

    fn serialize_u8(self, value: u8) -> Result<FastStr> {
        self.serialize_u64(value as u64)
    }

    fn serialize_u16(self, value: u16) -> Result<FastStr> {
        self.serialize_u64(value as u64)
    }

    fn serialize_u32(self, value: u32) -> Result<FastStr> {
        self.serialize_u64(value as u64)
    }

    fn serialize_u64(self, value: u64) -> Result<FastStr> {
        self.serialize_str(itoa::Buffer::new().format(value))
    }

    fn serialize_f32(self, value: f32) -> Result<FastStr> {
        if value.is_finite() {
            self.serialize_str(ryu::Buffer::new().format_finite(value))
        } else {
            Err(float_key_must_be_finite())
        }
    }

    fn serialize_f64(self, value: f64) -> Result<FastStr> {
        if value.is_finite() {
            self.serialize_str(ryu::Buffer::new().format_finite(value))
        } else {
            Err(float_key_must_be_finite())
        }
    }

    #[inline]
    fn serialize_char(self, value: char) -> Result<FastStr> {
        self.serialize_str(value.encode_utf8(&mut [0; 4]))
    }

    #[inline]
    fn serialize_str(self, value: &str) -> Result<FastStr> {
        Ok(FastStr::new(value))
    }

    fn serialize_bytes(self, _value: &[u8]) -> Result<FastStr> {
        Err(key_must_be_str_or_num(Unexpected::Other("bytes")))
    }

    fn serialize_unit(self) -> Result<FastStr> {
        Err(key_must_be_str_or_num(Unexpected::Other("unit")))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<FastStr> {
        Err(key_must_be_str_or_num(Unexpected::Other("unit struct")))
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<FastStr>
    where
        T: ?Sized + Serialize,
    {
        Err(key_must_be_str_or_num(Unexpected::NewtypeVariant))
    }

    fn serialize_none(self) -> Result<FastStr> {
        Err(key_must_be_str_or_num(Unexpected::Other("none")))
    }

    fn serialize_some<T>(self, _value: &T) -> Result<FastStr>
    where
        T: ?Sized + Serialize,
    {
        Err(key_must_be_str_or_num(Unexpected::Option))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(key_must_be_str_or_num(Unexpected::Seq))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(key_must_be_str_or_num(Unexpected::Other("tuple")))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(key_must_be_str_or_num(Unexpected::Other("tuple struct")))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(key_must_be_str_or_num(Unexpected::TupleVariant))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(key_must_be_str_or_num(Unexpected::Map))
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(key_must_be_str_or_num(Unexpected::Other(name)))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(key_must_be_str_or_num(Unexpected::StructVariant))
    }

    fn collect_str<T>(self, value: &T) -> Result<FastStr>
    where
        T: ?Sized + Display,
    {
        Ok(FastStr::new(value.to_string()))
    }
}

#[cfg(test)]
mod test {
    use std::collections::{BTreeMap, HashMap};

    use serde::{Deserialize, Serialize};

    use super::SerializeValue;
    use crate::{config::SerializeCfg, to_value, JsonValueTrait, Value};

    #[derive(Debug, serde::Serialize, Hash, Default, Eq, PartialEq)]
    struct User {
        string: String,
        number: i32,
        array: Vec<String>,
    }

    #[test]
    fn test_to_value() {
        let user = User {
            string: "hello".into(),
            number: 123,
            array: vec!["a".into(), "b".into(), "c".into()],
        };
        let got: Value = to_value(&user).unwrap();
        let expect = json!({
            "string": "hello",
            "number": 123,
            "array": ["a", "b", "c"],
        });
        assert_eq!(got, expect);

        let got: Value = to_value("hello").unwrap();
        assert_eq!(got, "hello");

        let got: Value = to_value(&123).unwrap();
        assert_eq!(got, 123);

        let got: Value = to_value(&Some('c')).unwrap();
        assert_eq!(got, "c");

        let got: Value = to_value(&None::<i32>).unwrap();
        assert!(got.is_null());
    }

    #[test]
    fn test_ser_errors() {
        let mut map = HashMap::<User, i64>::new();
        map.insert(User::default(), 123);
        assert!(to_value(&map).is_err());

        assert_eq!(to_value(&(u64::MAX as u128)).unwrap(), u64::MAX);
    }

    #[test]
    fn test_wide_integers_match_codec() {
        for n in [u64::MAX as u128 + 1, u128::MAX] {
            let through_codec = crate::decode(&crate::to_vec(&n).unwrap()).unwrap();
            assert_eq!(to_value(&n).unwrap(), through_codec);
        }
        for n in [i64::MIN as i128 - 1, i128::MIN, i128::MAX] {
            let through_codec = crate::decode(&crate::to_vec(&n).unwrap()).unwrap();
            assert_eq!(to_value(&n).unwrap(), through_codec);
        }
        assert_eq!(to_value(&(u64::MAX as u128 + 1)).unwrap(), 18446744073709551616.0);
    }

    #[derive(Default, Clone, Serialize, Deserialize, Debug)]
    pub struct CommonArgs {
        pub app_name: Option<String>,
    }

    #[derive(Default, Clone, Serialize, Deserialize, Debug)]
    struct Foo {
        a: i64,
        b: Vec<Value>,
    }

    #[test]
    fn test_to_value_nested() {
        let args = CommonArgs {
            app_name: Some("test".to_string()),
        };
        let foo: Foo =
            crate::from_str(r#"{"a": 1, "b":[123, "a", {}, [], {"a":null}, ["b"], 1.23]}"#)
                .unwrap();

        let value = json!({
            "arg": to_value(&args).unwrap_or_default(),
            "foo": to_value(&foo).unwrap_or_default(),
            "arr": [1, 2, to_value(&args).unwrap_or_default()],
        });

        assert_eq!(value["arr"][2]["app_name"].as_str(), Some("test"));
        assert_eq!(value["foo"]["b"][6].as_f64(), Some(1.23));
        assert!(value["foo"]["b"][4]["a"].is_null());
    }

    #[test]
    fn test_map_keys_to_value() {
        let mut map = BTreeMap::new();
        map.insert(1, "one");
        map.insert(-2, "minus two");
        let got = to_value(&map).unwrap();
        assert_eq!(got, json!({"1": "one", "-2": "minus two"}));

        let mut map = BTreeMap::new();
        map.insert(true, 0);
        assert_eq!(to_value(&map).unwrap(), json!({"true": 0}));
    }

    #[derive(Serialize)]
    enum Shape {
        Unit,
        Newtype(u8),
        Tuple(u8, u8),
        Struct { w: u8 },
    }

    #[test]
    fn test_enum_to_value() {
        assert_eq!(to_value(&Shape::Unit).unwrap(), "Unit");
        assert_eq!(to_value(&Shape::Newtype(1)).unwrap(), json!({"Newtype": 1}));
        assert_eq!(to_value(&Shape::Tuple(1, 2)).unwrap(), json!({"Tuple": [1, 2]}));
        assert_eq!(
            to_value(&Shape::Struct { w: 3 }).unwrap(),
            json!({"Struct": {"w": 3}})
        );
    }

    #[test]
    fn test_inf_or_nan_to_value() {
        assert_eq!(to_value(&f64::INFINITY).unwrap(), Value::new_null());
        assert_eq!(to_value(&f64::NAN).unwrap(), Value::new_null());
        assert_eq!(to_value(&f32::INFINITY).unwrap(), Value::new_null());
        assert_eq!(to_value(&f32::NAN).unwrap(), Value::new_null());
    }

    #[test]
    fn test_serialize_numbers() {
        let encode = |v: &Value| serde_json::to_string(v).unwrap();
        assert_eq!(encode(&Value::new_f64(1.0)), "1");
        assert_eq!(encode(&Value::new_f64(-42.0)), "-42");
        assert_eq!(encode(&Value::new_f64(1.5)), "1.5");
        assert_eq!(encode(&Value::new_f64(1e300)), "1e+300");
        assert_eq!(encode(&Value::new_f64(f64::NAN)), "null");
        assert_eq!(encode(&Value::new_f64(f64::NEG_INFINITY)), "null");
    }

    #[test]
    fn test_serialize_sorted_keys() {
        let v = json!({"b": 1, "a": {"d": null, "c": [true]}});
        let cfg = SerializeCfg {
            sort_map_keys: true,
        };
        let out = serde_json::to_string(&SerializeValue::new(&v, cfg)).unwrap();
        assert_eq!(out, r#"{"a":{"c":[true],"d":null},"b":1}"#);
    }
}
