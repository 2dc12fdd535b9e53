use super::{index::Index, node::Value};

/// JsonType is an enum that represents the type of a JSON value.
///
/// # Examples
/// ```
///  use generic_json::{JsonType, JsonValueTrait, Value};
///
///  let json: Value = generic_json::from_str(r#"{"a": 1, "b": true}"#).unwrap();
///
///  assert_eq!(json.get("a").unwrap().get_type(), JsonType::Number);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
pub enum JsonType {
    Null = 0,
    Boolean = 1,
    Number = 2,
    String = 3,
    Object = 4,
    Array = 5,
}

/// Read-only queries shared by `Value` and the wrappers a lookup returns.
///
/// Every query reports a miss, whether from a wrong variant, a missing key or an out of
/// range index, as `None`. Nothing here panics.
///
/// The trait is also implemented for `Option<V>` and `&V`, so lookups chain without
/// unwrapping:
///
/// ```
/// use generic_json::{json, JsonValueTrait};
///
/// let v = json!({"a": {"b": [10, 20, 30]}});
/// assert_eq!(v.get("a").get("b").get(1).as_i64(), Some(20));
/// assert_eq!(v.get("x").get("b").get(1).as_i64(), None);
/// ```
pub trait JsonValueTrait {
    /// Gets the type of the `JsonValue`. Returns `JsonType::Null` as default if `self` is
    /// `Option::None`.
    ///
    /// # Examples
    /// ```
    /// use generic_json::{JsonType, JsonValueTrait, Value};
    ///
    /// let json: Value = generic_json::from_str(r#"{"a": 1, "b": true}"#).unwrap();
    ///
    /// assert_eq!(json.get_type(), JsonType::Object);
    ///
    /// let v: Option<&Value> = json.get("c");
    /// assert!(v.is_none());
    /// assert_eq!(v.get_type(), JsonType::Null);
    /// ```
    fn get_type(&self) -> JsonType;

    /// Returns true if the `JsonValue` is a `bool`.
    #[inline]
    fn is_boolean(&self) -> bool {
        self.get_type() == JsonType::Boolean
    }

    /// Returns true if the `JsonValue` is true.
    #[inline]
    fn is_true(&self) -> bool {
        self.as_bool().unwrap_or_default()
    }

    /// Returns true if the `JsonValue` is false.
    #[inline]
    fn is_false(&self) -> bool {
        self.as_bool() == Some(false)
    }

    /// Returns true if the `JsonValue` is `null`.
    ///
    /// Note that `Option::None` also reports `true` here, since its type is `Null`. Match on
    /// the `Option` first when a missing value and a present `null` must be told apart.
    #[inline]
    fn is_null(&self) -> bool {
        self.get_type() == JsonType::Null
    }

    /// Returns true if the `JsonValue` is a `number`.
    #[inline]
    fn is_number(&self) -> bool {
        self.get_type() == JsonType::Number
    }

    /// Returns true if the `JsonValue` is a `string`.
    #[inline]
    fn is_str(&self) -> bool {
        self.get_type() == JsonType::String
    }

    /// Returns true if the `JsonValue` is an `array`.
    #[inline]
    fn is_array(&self) -> bool {
        self.get_type() == JsonType::Array
    }

    /// Returns true if the `JsonValue` is an `object`.
    #[inline]
    fn is_object(&self) -> bool {
        self.get_type() == JsonType::Object
    }

    /// Returns the number if the `JsonValue` is a `number`.
    fn as_f64(&self) -> Option<f64>;

    /// Returns the number narrowed to `f32` if the `JsonValue` is a `number`.
    #[inline]
    fn as_f32(&self) -> Option<f32> {
        self.as_f64().map(|n| n as f32)
    }

    /// Returns the number truncated toward zero if the `JsonValue` is a `number`.
    ///
    /// This is a conversion, not a check: `3.7` gives `3`, values beyond the `i64` range
    /// saturate and `NaN` gives `0`.
    ///
    /// # Examples
    /// ```
    /// use generic_json::{json, JsonValueTrait};
    ///
    /// assert_eq!(json!(7.9).as_i64(), Some(7));
    /// assert_eq!(json!(-7.9).as_i64(), Some(-7));
    /// assert_eq!(json!("7").as_i64(), None);
    /// ```
    #[inline]
    fn as_i64(&self) -> Option<i64> {
        self.as_f64().map(|n| n as i64)
    }

    /// Returns the number truncated toward zero and saturated to the `i32` range if the
    /// `JsonValue` is a `number`.
    #[inline]
    fn as_i32(&self) -> Option<i32> {
        self.as_f64().map(|n| n as i32)
    }

    /// Returns the str if the `JsonValue` is a `string`.
    fn as_str(&self) -> Option<&str>;

    /// Returns the bool if the `JsonValue` is a `boolean`.
    fn as_bool(&self) -> Option<bool>;

    /// Returns the value from index if the `JsonValue` is an `array` or `object`.
    /// An integer index is for arrays, a string index is for objects. Returns None
    /// otherwise, and for negative or out of range positions.
    ///
    /// # Examples
    /// ```
    /// use generic_json::{json, JsonValueTrait};
    ///
    /// let arr = json!([10, 20, 30]);
    /// assert_eq!(arr.get(1).unwrap(), 20);
    /// assert!(arr.get(3).is_none());
    /// assert!(arr.get(-1).is_none());
    ///
    /// let obj = json!({"k": null});
    /// assert!(obj.get("k").unwrap().is_null());
    /// assert!(obj.get("missing").is_none());
    /// ```
    fn get<I: Index>(&self, index: I) -> Option<&Value>;

    /// Walks a `.`-separated key path through nested objects.
    ///
    /// Each step requires the current value to be an `object` holding the next key. The
    /// walk returns `None` as soon as a step fails, and also for an empty path or a path
    /// with an empty segment. Otherwise it returns whatever sits at the end, of any
    /// variant.
    ///
    /// # Examples
    /// ```
    /// use generic_json::{json, JsonValueTrait};
    ///
    /// let v = json!({"a": {"b": {"c": 42}}});
    /// assert_eq!(v.key_path("a.b.c").unwrap(), 42);
    /// assert_eq!(v.key_path("a.b").unwrap(), &json!({"c": 42}));
    /// assert!(v.key_path("a.x.c").is_none());
    /// assert!(v.key_path("").is_none());
    /// ```
    #[inline]
    fn key_path(&self, path: &str) -> Option<&Value> {
        self.query_key_path(path.split('.'))
    }

    /// Same walk as [`key_path`][JsonValueTrait::key_path] over segments that are
    /// already split. An empty sequence returns `None`.
    fn query_key_path<P>(&self, path: P) -> Option<&Value>
    where
        P: IntoIterator,
        P::Item: AsRef<str>;
}

/// A trait for all JSON object or array values. Used by `Value`.
pub trait JsonContainerTrait {
    type ObjectType;
    type ArrayType;

    /// Returns the object if the `JsonValue` is an `object`.
    fn as_object(&self) -> Option<&Self::ObjectType>;

    /// Returns the array if the `JsonValue` is an `array`.
    fn as_array(&self) -> Option<&Self::ArrayType>;
}

// A helper trait for Option types
impl<V: JsonValueTrait> JsonValueTrait for Option<V> {
    fn get_type(&self) -> JsonType {
        self.as_ref().map_or(JsonType::Null, |v| v.get_type())
    }

    fn as_f64(&self) -> Option<f64> {
        self.as_ref().and_then(|v| v.as_f64())
    }

    fn as_str(&self) -> Option<&str> {
        self.as_ref().and_then(|v| v.as_str())
    }

    fn as_bool(&self) -> Option<bool> {
        self.as_ref().and_then(|v| v.as_bool())
    }

    fn get<I: Index>(&self, index: I) -> Option<&Value> {
        self.as_ref().and_then(|v| v.get(index))
    }

    fn query_key_path<P>(&self, path: P) -> Option<&Value>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        self.as_ref().and_then(|v| v.query_key_path(path))
    }
}

impl<V: JsonContainerTrait> JsonContainerTrait for Option<V> {
    type ArrayType = V::ArrayType;
    type ObjectType = V::ObjectType;

    fn as_array(&self) -> Option<&Self::ArrayType> {
        self.as_ref().and_then(|v| v.as_array())
    }

    fn as_object(&self) -> Option<&Self::ObjectType> {
        self.as_ref().and_then(|v| v.as_object())
    }
}

impl<V: JsonValueTrait + ?Sized> JsonValueTrait for &V {
    fn get_type(&self) -> JsonType {
        (**self).get_type()
    }

    fn as_f64(&self) -> Option<f64> {
        (**self).as_f64()
    }

    fn as_str(&self) -> Option<&str> {
        (**self).as_str()
    }

    fn as_bool(&self) -> Option<bool> {
        (**self).as_bool()
    }

    fn get<I: Index>(&self, index: I) -> Option<&Value> {
        (**self).get(index)
    }

    fn query_key_path<P>(&self, path: P) -> Option<&Value>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        (**self).query_key_path(path)
    }
}

impl<V: JsonContainerTrait + ?Sized> JsonContainerTrait for &V {
    type ArrayType = V::ArrayType;
    type ObjectType = V::ObjectType;

    fn as_array(&self) -> Option<&Self::ArrayType> {
        (**self).as_array()
    }

    fn as_object(&self) -> Option<&Self::ObjectType> {
        (**self).as_object()
    }
}

#[cfg(test)]
mod test {
    use crate::{JsonContainerTrait, JsonType, JsonValueTrait, Value};

    #[test]
    fn test_numeric_narrowing() {
        assert_eq!(json!(7.9).as_i64(), Some(7));
        assert_eq!(json!(3.7).as_i32(), Some(3));
        assert_eq!(json!(-0.5).as_i64(), Some(0));
        assert_eq!(json!(1e300).as_i64(), Some(i64::MAX));
        assert_eq!(json!(1e300).as_i32(), Some(i32::MAX));
        assert_eq!(Value::new_f64(f64::NAN).as_i64(), Some(0));
        assert_eq!(json!(0.1).as_f32(), Some(0.1_f32));
        assert_eq!(json!(true).as_i64(), None);
    }

    #[test]
    fn test_option_helpers() {
        let none: Option<&Value> = None;
        assert_eq!(none.get_type(), JsonType::Null);
        assert!(none.as_str().is_none());
        assert!(none.get(0).is_none());
        assert!(none.key_path("a").is_none());
        assert!(none.as_object().is_none());
        assert!(!none.is_true());
        assert!(!none.is_false());

        let v = json!([false]);
        assert!(v.get(0).is_false());
        assert!(Some(&v).as_array().is_some());
    }

    #[test]
    fn test_null_vs_absent() {
        let v = json!({"k": null});
        let present = v.get("k");
        let missing = v.get("missing");
        assert!(matches!(present, Some(Value::Null)));
        assert!(missing.is_none());
        assert_ne!(present, missing);
    }
}
