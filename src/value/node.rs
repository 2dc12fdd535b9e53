use std::fmt::{self, Display};

use faststr::FastStr;

use super::{
    array::Array,
    index::Index,
    object::{Map, Object},
    value_trait::{JsonContainerTrait, JsonType, JsonValueTrait},
};
use crate::keypath::{self, KeyPath};

/// Represents any valid JSON value.
///
/// `Value` is a closed sum of the six JSON variants. Numbers are stored as `f64`, so
/// there is no separate integer variant and integers are exact only up to 2^53.
///
/// A `Value` exposes no mutating API: once built it can be shared between threads
/// freely, e.g. behind an `Arc`.
///
/// # Examples
///
/// ```
/// use generic_json::{json, JsonValueTrait, Value};
///
/// let v = json!({"a": [1, 2.5, "x", null, true]});
///
/// assert!(v.is_object());
/// assert_eq!(v.key_path("a").get(0).as_i64(), Some(1));
/// assert!(v["a"][3].is_null());
///
/// match &v["a"][2] {
///     Value::String(s) => assert_eq!(s.as_str(), "x"),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Represents JSON null, which is distinct from an absent value.
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(FastStr),
    Array(Array),
    Object(Object),
}

impl Value {
    /// Create a new JSON null value.
    #[inline]
    pub const fn new_null() -> Self {
        Value::Null
    }

    /// Create a new JSON boolean value.
    #[inline]
    pub const fn new_bool(val: bool) -> Self {
        Value::Bool(val)
    }

    /// Create a new JSON number value. The float is stored as-is, including NaN and
    /// infinity, which encode as `null`.
    #[inline]
    pub const fn new_f64(val: f64) -> Self {
        Value::Number(val)
    }

    /// Create a new JSON number value from an integer. Integers beyond 2^53 lose
    /// precision.
    #[inline]
    pub const fn new_i64(val: i64) -> Self {
        Value::Number(val as f64)
    }

    /// Create a new JSON number value from an unsigned integer. Integers beyond 2^53 lose
    /// precision.
    #[inline]
    pub const fn new_u64(val: u64) -> Self {
        Value::Number(val as f64)
    }

    /// Create a new JSON string value. The string is copied.
    #[inline]
    pub fn new_str(val: &str) -> Self {
        Value::String(FastStr::new(val))
    }

    /// Create a new JSON string value from a static string without copying.
    #[inline]
    pub fn from_static_str(val: &'static str) -> Self {
        Value::String(FastStr::from_static_str(val))
    }

    /// Create a new JSON string value from a [`FastStr`].
    #[inline]
    pub fn new_faststr(val: FastStr) -> Self {
        Value::String(val)
    }

    /// Create a new JSON array holding `elems` in order.
    #[inline]
    pub fn new_array(elems: Vec<Value>) -> Self {
        Value::Array(Array(elems))
    }

    /// Create a new JSON object from key/value entries. If a key repeats, the last
    /// entry wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use generic_json::{json, Value};
    ///
    /// let v = Value::new_object([("a", json!(1)), ("b", json!(null)), ("a", json!(2))]);
    /// assert_eq!(v, json!({"a": 2, "b": null}));
    /// ```
    pub fn new_object<K, I>(entries: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let iter = entries.into_iter();
        let mut map = Map::with_capacity_and_hasher(iter.size_hint().0, Default::default());
        for (k, v) in iter {
            map.insert(FastStr::new(k.as_ref()), v);
        }
        Value::Object(Object(map))
    }

    /// Looks up a pre-split [`KeyPath`]. See [`JsonValueTrait::key_path`].
    ///
    /// # Examples
    ///
    /// ```
    /// use generic_json::{json, key_path};
    ///
    /// let v = json!({"a": {"b": {"c": 42}}});
    /// let path = key_path!["a", "b", "c"];
    /// assert_eq!(v.lookup(&path).unwrap(), 42);
    /// ```
    #[inline]
    pub fn lookup(&self, path: &KeyPath) -> Option<&Value> {
        keypath::walk(self, path.segments())
    }

    /// Takes the array out of the value, or returns `None` if it is not an array.
    #[inline]
    pub fn into_array(self) -> Option<Array> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Takes the object out of the value, or returns `None` if it is not an object.
    #[inline]
    pub fn into_object(self) -> Option<Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Returns the number of elements in an array or pairs in an object, `0` otherwise.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Value::Array(arr) => arr.len(),
            Value::Object(obj) => obj.len(),
            _ => 0,
        }
    }

    /// Returns `true` for an empty array or object, and for every scalar.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl JsonValueTrait for Value {
    #[inline]
    fn get_type(&self) -> JsonType {
        match self {
            Value::Null => JsonType::Null,
            Value::Bool(_) => JsonType::Boolean,
            Value::Number(_) => JsonType::Number,
            Value::String(_) => JsonType::String,
            Value::Array(_) => JsonType::Array,
            Value::Object(_) => JsonType::Object,
        }
    }

    #[inline]
    fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    #[inline]
    fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    fn get<I: Index>(&self, index: I) -> Option<&Value> {
        index.value_index_into(self)
    }

    #[inline]
    fn query_key_path<P>(&self, path: P) -> Option<&Value>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        let segments: Vec<P::Item> = path.into_iter().collect();
        keypath::walk(self, &segments)
    }
}

impl JsonContainerTrait for Value {
    type ArrayType = Array;
    type ObjectType = Object;

    #[inline]
    fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

impl Display for Value {
    /// Writes the compact JSON encoding, or the indented one with `{:#}`.
    ///
    /// # Examples
    ///
    /// ```
    /// use generic_json::json;
    ///
    /// let v = json!({"a": [1, true]});
    /// assert_eq!(v.to_string(), r#"{"a":[1,true]}"#);
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let out = if f.alternate() {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        f.write_str(&out.map_err(|_| fmt::Error)?)
    }
}
