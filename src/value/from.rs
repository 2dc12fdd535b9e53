use std::{borrow::Cow, collections::HashMap, hash::BuildHasher, str::FromStr};

use faststr::FastStr;

use super::{
    array::Array,
    object::{Map, Object},
};
use crate::value::node::Value;

impl From<f64> for Value {
    /// Convert `f64` to a number `Value`. The float is stored as-is.
    ///
    /// # Examples
    ///
    /// ```
    /// use generic_json::{json, Value};
    ///
    /// assert_eq!(Value::from(2.5), json!(2.5));
    /// ```
    #[inline]
    fn from(val: f64) -> Self {
        Value::new_f64(val)
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(val: f32) -> Self {
        Value::new_f64(val as f64)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ident),*) => {
        $(
            impl From<$ty> for Value {
                /// Convert an integer to a number `Value`, widened to `f64`.
                #[inline]
                fn from(val: $ty) -> Self {
                    Value::Number(val as f64)
                }
            }
        )*
    };
    () => {};
}

impl_from_integer!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl From<bool> for Value {
    /// Convert `bool` to a boolean `Value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use generic_json::{JsonValueTrait, Value};
    ///
    /// let x: Value = true.into();
    /// assert!(x.is_true());
    /// ```
    #[inline]
    fn from(val: bool) -> Self {
        Value::new_bool(val)
    }
}

macro_rules! impl_from_str {
    () => {};
    ($($ty:ident),*) => {
        $(
            impl From<&$ty> for Value {
                /// Convert a string type into a string `Value`. The string will be copied into the `Value`.
                ///
                /// If it is `&'static str`, [`Value::from_static_str`] avoids the copy.
                #[inline]
                fn from(val: &$ty) -> Self {
                    Value::new_str(val)
                }
            }
        )*
    };
}

impl_from_str!(String, str);

impl From<String> for Value {
    #[inline]
    fn from(val: String) -> Self {
        Value::String(FastStr::from(val))
    }
}

impl From<FastStr> for Value {
    #[inline]
    fn from(val: FastStr) -> Self {
        Value::new_faststr(val)
    }
}

impl From<&FastStr> for Value {
    #[inline]
    fn from(val: &FastStr) -> Self {
        Value::new_faststr(val.clone())
    }
}

impl<'a> From<Cow<'a, str>> for Value {
    /// Convert copy-on-write string to a string `Value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::borrow::Cow;
    ///
    /// use generic_json::Value;
    ///
    /// let s1: Cow<str> = Cow::Borrowed("hello");
    /// let x1 = Value::from(s1);
    ///
    /// let s2: Cow<str> = Cow::Owned("hello".to_string());
    /// let x2 = Value::from(s2);
    ///
    /// assert_eq!(x1, x2);
    /// ```
    #[inline]
    fn from(value: Cow<'a, str>) -> Self {
        match value {
            Cow::Borrowed(s) => Value::new_str(s),
            Cow::Owned(s) => s.into(),
        }
    }
}

impl From<char> for Value {
    /// Convert `char` to a string `Value`.
    #[inline]
    fn from(val: char) -> Self {
        Value::String(FastStr::new(val.encode_utf8(&mut [0; 4])))
    }
}

impl From<()> for Value {
    /// Convert `()` to `Value::Null`.
    ///
    /// # Examples
    ///
    /// ```
    /// use generic_json::{JsonValueTrait, Value};
    ///
    /// assert!(Value::from(()).is_null());
    /// ```
    #[inline]
    fn from(_: ()) -> Self {
        Value::new_null()
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    /// Convert `None` to `Value::Null` and `Some(v)` to `v`.
    ///
    /// # Examples
    ///
    /// ```
    /// use generic_json::{JsonValueTrait, Value};
    ///
    /// let x = Value::from(Some(123));
    /// assert_eq!(x.as_i64(), Some(123));
    ///
    /// let x: Value = None::<i64>.into();
    /// assert!(x.is_null());
    /// ```
    #[inline]
    fn from(opt: Option<T>) -> Self {
        match opt {
            None => Value::new_null(),
            Some(value) => value.into(),
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    /// Convert a `Vec` to an array `Value`, keeping the element order.
    ///
    /// # Examples
    ///
    /// ```
    /// use generic_json::{json, Value};
    ///
    /// assert_eq!(Value::from(vec!["hi", "hello"]), json!(["hi", "hello"]));
    ///
    /// assert_eq!(Value::from(Vec::<i32>::new()), json!([]));
    ///
    /// assert_eq!(
    ///     Value::from(vec![json!(null), json!("hi")]),
    ///     json!([null, "hi"])
    /// );
    /// ```
    #[inline]
    fn from(val: Vec<T>) -> Self {
        Value::Array(val.into())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    /// Convert a slice `&[T]` to an array `Value`.
    #[inline]
    fn from(val: &[T]) -> Self {
        Value::Array(val.iter().cloned().collect())
    }
}

impl<K: AsRef<str>, V: Into<Value>, S: BuildHasher> From<HashMap<K, V, S>> for Value {
    /// Convert a string-keyed `HashMap` to an object `Value`.
    #[inline]
    fn from(val: HashMap<K, V, S>) -> Self {
        Value::Object(val.into_iter().collect())
    }
}

impl From<Array> for Value {
    #[inline]
    fn from(val: Array) -> Self {
        Value::Array(val)
    }
}

impl From<Object> for Value {
    #[inline]
    fn from(val: Object) -> Self {
        Value::Object(val)
    }
}

impl FromStr for Value {
    type Err = crate::DecodeError;

    /// Decode JSON text into a `Value`, same as [`from_str`][crate::from_str].
    ///
    /// # Examples
    ///
    /// ```
    /// use generic_json::{json, Value};
    ///
    /// let x: Value = r#"{"a": [1, null]}"#.parse().unwrap();
    /// assert_eq!(x, json!({"a": [1, null]}));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::from_str(s)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    /// Create an array `Value` by collecting an iterator of array elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::iter::FromIterator;
    ///
    /// use generic_json::{json, Value};
    ///
    /// let v = std::iter::repeat(6).take(3);
    /// let x: Value = v.collect();
    /// assert_eq!(x, json!([6, 6, 6]));
    ///
    /// let x = Value::from_iter(vec!["generic", "json", "serde"]);
    /// assert_eq!(x, json!(["generic", "json", "serde"]));
    /// ```
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

//////////////////////////////////////////////////////////////////////////////

impl<T: Into<Value>> From<Vec<T>> for Array {
    /// Convert a `Vec` to an `Array`.
    ///
    /// # Examples
    ///
    /// ```
    /// use generic_json::{array, value::Array};
    ///
    /// let v = vec!["hi", "hello"];
    /// let x: Array = v.into();
    /// assert_eq!(x, array!["hi", "hello"]);
    /// ```
    #[inline]
    fn from(val: Vec<T>) -> Self {
        Array(val.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> FromIterator<T> for Array {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array(iter.into_iter().map(Into::into).collect())
    }
}

impl<K: AsRef<str>, V: Into<Value>> FromIterator<(K, V)> for Object {
    /// Create an `Object` by collecting an iterator of key-value pairs. The key will be
    /// copied. If a key repeats, the last pair wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use generic_json::{object, Object};
    ///
    /// let mut map = HashMap::new();
    /// map.insert("generic", 40);
    /// map.insert("json", 2);
    ///
    /// let x: Object = map.into_iter().collect();
    /// assert_eq!(x, object! {"generic": 40, "json": 2});
    /// ```
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = Map::with_capacity_and_hasher(iter.size_hint().0, Default::default());
        for (k, v) in iter {
            map.insert(FastStr::new(k.as_ref()), v.into());
        }
        Object(map)
    }
}

impl<K: AsRef<str>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Object {
    /// Convert an array of key-value pairs to an `Object`.
    #[inline]
    fn from(val: [(K, V); N]) -> Self {
        val.into_iter().collect()
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::*;
    use crate::{json, JsonValueTrait};

    #[test]
    fn test_value_from() {
        assert_eq!(Value::from(1_u64).as_i64(), Some(1));
        assert_eq!(Value::from(-1_i64).as_i64(), Some(-1));
        assert_eq!(Value::from(1.5_f32).as_f64(), Some(1.5));
        assert_eq!(Value::from(f64::MAX).as_f64(), Some(f64::MAX));
        assert!(Value::from(f64::NAN).as_f64().unwrap().is_nan());
        assert_eq!(Value::from('x'), json!("x"));
        assert_eq!(Value::from("s".to_string()), "s");
        assert_eq!(Value::from(&"s".to_string()), "s");
        assert_eq!(Value::from(FastStr::from_static_str("f")), "f");
        assert_eq!(Value::from(&[1, 2][..]), json!([1, 2]));
        assert_eq!(Value::from(None::<bool>), Value::Null);
    }

    #[test]
    fn test_from_hash_map() {
        let mut map = HashMap::new();
        map.insert("a".to_string(), vec![1, 2]);
        assert_eq!(Value::from(map), json!({"a": [1, 2]}));
    }

    #[test]
    fn test_object_from_pairs() {
        let obj = Object::from([("a", json!(1)), ("a", json!(2))]);
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["a"], 2);
    }

    #[test]
    fn test_parse_value() {
        let v: Value = "[1, 2.5]".parse().unwrap();
        assert_eq!(v, json!([1, 2.5]));
        assert!("[1,".parse::<Value>().is_err());
    }
}
