use faststr::FastStr;

use super::node::Value;
use crate::util::private::Sealed;

impl<I> std::ops::Index<I> for Value
where
    I: Index,
{
    type Output = Value;

    /// Index into an array `Value` using the syntax `value[0]` and index into an
    /// object `Value` using the syntax `value["k"]`.
    ///
    /// Returns a null `Value` if the `Value` type does not match the index, or the
    /// index does not exist in the array or object. Use [`get`] when a missing entry
    /// has to be told apart from a stored `null`.
    ///
    /// For retrieving deeply nested values, you should have a look at the
    /// [`key_path`] method.
    ///
    /// [`get`]: crate::JsonValueTrait::get
    /// [`key_path`]: crate::JsonValueTrait::key_path
    ///
    /// # Examples
    ///
    /// ```
    /// use generic_json::{json, JsonValueTrait};
    ///
    /// let data = json!({
    ///     "x": {
    ///         "y": ["z", "zz"]
    ///     }
    /// });
    ///
    /// assert_eq!(data["x"]["y"], json!(["z", "zz"]));
    /// assert_eq!(data["x"]["y"][0], json!("z"));
    ///
    /// assert_eq!(data["a"], json!(null)); // returns null for undefined values
    /// assert_eq!(data["a"]["b"], json!(null)); // does not panic
    ///
    /// assert_eq!(data.key_path("x.y").get(1).unwrap(), "zz");
    /// ```
    #[inline]
    fn index(&self, index: I) -> &Value {
        static NULL: Value = Value::new_null();
        index.value_index_into(self).unwrap_or(&NULL)
    }
}

/// An indexing trait for `generic_json::Value`: integers address array positions and
/// strings address object keys.
pub trait Index: Sealed {
    /// Return None if the index is not already in the array or object.
    #[doc(hidden)]
    fn value_index_into<'v>(&self, v: &'v Value) -> Option<&'v Value>;
}

impl Index for usize {
    #[inline]
    fn value_index_into<'v>(&self, v: &'v Value) -> Option<&'v Value> {
        match v {
            Value::Array(arr) => arr.get(*self),
            _ => None,
        }
    }
}

// Signed positions never wrap around: a negative index is a miss.
macro_rules! impl_signed_index {
    ($($t:ty),*) => {
        $(
            impl Index for $t {
                #[inline]
                fn value_index_into<'v>(&self, v: &'v Value) -> Option<&'v Value> {
                    usize::try_from(*self).ok()?.value_index_into(v)
                }
            }
        )*
    };
}

impl_signed_index!(i32, i64, isize);

macro_rules! impl_str_index {
    ($($t:ty),*) => {
        $(
            impl Index for $t {
                #[inline]
                fn value_index_into<'v>(&self, v: &'v Value) -> Option<&'v Value> {
                    match v {
                        Value::Object(obj) => obj.get(self),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_str_index!(str, String, FastStr);

impl<T> Index for &T
where
    T: ?Sized + Index,
{
    #[inline]
    fn value_index_into<'v>(&self, v: &'v Value) -> Option<&'v Value> {
        (**self).value_index_into(v)
    }
}

#[cfg(test)]
mod test {
    use faststr::FastStr;

    use crate::{JsonValueTrait, Value};

    #[test]
    fn test_index_array() {
        let v = json!([10, 20, 30]);
        assert_eq!(v.get(1).unwrap(), 20);
        assert_eq!(v.get(1_usize).unwrap(), 20);
        assert_eq!(v.get(2_i64).unwrap(), 30);
        assert!(v.get(3).is_none());
        assert!(v.get(-1).is_none());
        assert!(v.get(-1_isize).is_none());
        assert!(v.get("1").is_none());
        assert_eq!(v[0], 10);
        assert!(v[3].is_null());
        assert!(v[-1].is_null());
    }

    #[test]
    fn test_index_object() {
        let v = json!({"k": null, "n": 1});
        assert_eq!(v.get("k"), Some(&Value::Null));
        assert!(v.get("missing").is_none());
        assert_eq!(v.get(&"n".to_string()).unwrap(), 1);
        assert_eq!(v.get("n".to_string()).unwrap(), 1);
        assert_eq!(v.get(FastStr::from_static_str("n")).unwrap(), 1);
        assert!(v.get(0).is_none());
        assert!(v["missing"].is_null());
        assert!(v["k"].is_null());
    }

    #[test]
    fn test_index_scalar() {
        let v = json!("text");
        assert!(v.get(0).is_none());
        assert!(v.get("a").is_none());
        assert!(v[0]["a"].is_null());
    }
}
