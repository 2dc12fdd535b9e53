use std::{
    any::Any,
    collections::{BTreeMap, HashMap},
};

use faststr::FastStr;
use tracing::debug;

use super::{
    node::Value,
    object::{Map, Object},
};
use crate::error::InitializationError;

/// An untyped host sequence accepted by [`Value::from_any`].
pub type AnyArray = Vec<Box<dyn Any>>;

/// An untyped host mapping accepted by [`Value::from_any`].
pub type AnyMap = HashMap<String, Box<dyn Any>>;

impl Value {
    /// Classifies an untyped host value into a `Value`.
    ///
    /// The shape tests run in a fixed order and the first match wins:
    ///
    /// 1. floating point (`f64`, `f32`) becomes a number, as-is;
    /// 2. integers (`i8` to `i128`, `u8` to `u128`, `isize`, `usize`) become a number,
    ///    widened to `f64`, which is lossy beyond 2^53;
    /// 3. text (`String`, `&'static str`, `Box<str>`, `FastStr`, `char`) becomes a string;
    /// 4. `bool` becomes a bool;
    /// 5. sequences (`Vec<Box<dyn Any>>`, `Vec<Box<dyn Any + Send + Sync>>`, `Vec<Value>`)
    ///    become an array, classifying every element the same way;
    /// 6. string-keyed maps (`HashMap` or `BTreeMap` from `String` to `Box<dyn Any>`,
    ///    `Box<dyn Any + Send + Sync>` or `Value`) become an object, classifying every
    ///    value the same way;
    /// 7. a `Value` is returned unchanged;
    /// 8. anything else is an [`InitializationError`].
    ///
    /// A container fails as a whole on its first unclassifiable element; no partial
    /// value is produced. The recursion follows the nesting depth of the input and
    /// does not detect cycles.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::any::Any;
    ///
    /// use generic_json::{json, value::{AnyArray, AnyMap}, Value};
    ///
    /// let mut map = AnyMap::new();
    /// map.insert("n".to_string(), Box::new(3_u8));
    /// map.insert("tags".to_string(), Box::new(vec![Box::new("a") as Box<dyn Any>, Box::new(true)]));
    ///
    /// assert_eq!(Value::from_any(&map).unwrap(), json!({"n": 3, "tags": ["a", true]}));
    ///
    /// struct Opaque;
    /// let bad: AnyArray = vec![Box::new(1.5), Box::new(Opaque)];
    /// assert!(Value::from_any(&bad).is_err());
    /// ```
    pub fn from_any(value: &dyn Any) -> Result<Value, InitializationError> {
        classify(value).inspect_err(|_| {
            debug!(type_id = ?value.type_id(), "input is not a JSON value");
        })
    }
}

// Returns early from `classify` when `$value` downcasts to one of the types.
macro_rules! classify_as {
    ($value:ident, |$v:ident| $make:expr, $($ty:ty),+) => {
        $(
            if let Some($v) = $value.downcast_ref::<$ty>() {
                return Ok($make);
            }
        )+
    };
}

fn classify(value: &dyn Any) -> Result<Value, InitializationError> {
    classify_as!(value, |n| Value::Number(*n), f64);
    classify_as!(value, |n| Value::Number(*n as f64), f32);
    classify_as!(
        value,
        |n| Value::Number(*n as f64),
        i8,
        i16,
        i32,
        i64,
        i128,
        isize,
        u8,
        u16,
        u32,
        u64,
        u128,
        usize
    );

    classify_as!(value, |s| Value::String(FastStr::new(s)), String, &'static str, Box<str>);
    classify_as!(value, |s| Value::String(s.clone()), FastStr);
    classify_as!(value, |c| Value::String(FastStr::new(c.to_string())), char);

    classify_as!(value, |b| Value::Bool(*b), bool);

    if let Some(elems) = value.downcast_ref::<Vec<Box<dyn Any>>>() {
        return classify_array(elems.iter().map(|e| &**e as &dyn Any));
    }
    if let Some(elems) = value.downcast_ref::<Vec<Box<dyn Any + Send + Sync>>>() {
        return classify_array(elems.iter().map(|e| &**e as &dyn Any));
    }
    if let Some(elems) = value.downcast_ref::<Vec<Value>>() {
        return classify_array(elems.iter().map(|e| e as &dyn Any));
    }

    if let Some(map) = value.downcast_ref::<HashMap<String, Box<dyn Any>>>() {
        return classify_object(map.iter().map(|(k, v)| (k, &**v as &dyn Any)));
    }
    if let Some(map) = value.downcast_ref::<BTreeMap<String, Box<dyn Any>>>() {
        return classify_object(map.iter().map(|(k, v)| (k, &**v as &dyn Any)));
    }
    if let Some(map) = value.downcast_ref::<HashMap<String, Box<dyn Any + Send + Sync>>>() {
        return classify_object(map.iter().map(|(k, v)| (k, &**v as &dyn Any)));
    }
    if let Some(map) = value.downcast_ref::<BTreeMap<String, Box<dyn Any + Send + Sync>>>() {
        return classify_object(map.iter().map(|(k, v)| (k, &**v as &dyn Any)));
    }
    if let Some(map) = value.downcast_ref::<HashMap<String, Value>>() {
        return classify_object(map.iter().map(|(k, v)| (k, v as &dyn Any)));
    }
    if let Some(map) = value.downcast_ref::<BTreeMap<String, Value>>() {
        return classify_object(map.iter().map(|(k, v)| (k, v as &dyn Any)));
    }

    classify_as!(value, |v| v.clone(), Value);

    Err(InitializationError)
}

fn classify_array<'a, I>(elems: I) -> Result<Value, InitializationError>
where
    I: ExactSizeIterator<Item = &'a dyn Any>,
{
    let mut arr = Vec::with_capacity(elems.len());
    for (index, elem) in elems.enumerate() {
        let elem = classify(elem).inspect_err(|_| {
            debug!(index, "array element is not a JSON value");
        })?;
        arr.push(elem);
    }
    Ok(Value::new_array(arr))
}

fn classify_object<'a, I>(entries: I) -> Result<Value, InitializationError>
where
    I: ExactSizeIterator<Item = (&'a String, &'a dyn Any)>,
{
    let mut map = Map::with_capacity_and_hasher(entries.len(), Default::default());
    for (key, val) in entries {
        let val = classify(val).inspect_err(|_| {
            debug!(key = key.as_str(), "object value is not a JSON value");
        })?;
        map.insert(FastStr::new(key), val);
    }
    Ok(Value::Object(Object(map)))
}

impl TryFrom<&dyn Any> for Value {
    type Error = InitializationError;

    /// Same as [`Value::from_any`].
    #[inline]
    fn try_from(value: &dyn Any) -> Result<Self, Self::Error> {
        Value::from_any(value)
    }
}

impl TryFrom<Box<dyn Any>> for Value {
    type Error = InitializationError;

    /// Classifies the boxed value like [`Value::from_any`]. A boxed `Value` is moved out
    /// without a copy.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::any::Any;
    ///
    /// use generic_json::{json, Value};
    ///
    /// let boxed: Box<dyn Any> = Box::new(json!([1, 2]));
    /// assert_eq!(Value::try_from(boxed).unwrap(), json!([1, 2]));
    ///
    /// let boxed: Box<dyn Any> = Box::new(42_i64);
    /// assert_eq!(Value::try_from(boxed).unwrap(), 42);
    /// ```
    fn try_from(value: Box<dyn Any>) -> Result<Self, Self::Error> {
        match value.downcast::<Value>() {
            Ok(v) => Ok(*v),
            Err(other) => Value::from_any(&*other),
        }
    }
}

#[cfg(test)]
mod test {
    use std::{
        any::Any,
        collections::{BTreeMap, HashMap},
    };

    use faststr::FastStr;

    use super::{AnyArray, AnyMap};
    use crate::{error::InitializationError, json, JsonValueTrait, Value};

    struct Opaque;

    #[test]
    fn test_classify_scalars() {
        assert_eq!(Value::from_any(&1.5_f64).unwrap().as_f64(), Some(1.5));
        assert_eq!(Value::from_any(&0.25_f32).unwrap().as_f64(), Some(0.25));
        assert_eq!(Value::from_any(&-7_i32).unwrap().as_f64(), Some(-7.0));
        assert_eq!(Value::from_any(&7_u8).unwrap().as_i64(), Some(7));
        assert_eq!(Value::from_any(&7_usize).unwrap().as_i64(), Some(7));
        assert_eq!(Value::from_any(&"str").unwrap().as_str(), Some("str"));
        assert_eq!(
            Value::from_any(&"owned".to_string()).unwrap().as_str(),
            Some("owned")
        );
        assert_eq!(
            Value::from_any(&FastStr::from_static_str("fast")).unwrap().as_str(),
            Some("fast")
        );
        assert_eq!(Value::from_any(&'c').unwrap().as_str(), Some("c"));
        assert_eq!(Value::from_any(&true).unwrap().as_bool(), Some(true));
    }

    #[test]
    fn test_integer_widening_is_lossy() {
        let big = (1_u64 << 53) + 1;
        let v = Value::from_any(&big).unwrap();
        assert_eq!(v.as_f64(), Some(big as f64));
        assert_ne!(v.as_f64().map(|n| n as u64), Some(big));
    }

    #[test]
    fn test_classify_unrecognized() {
        assert_eq!(Value::from_any(&Opaque), Err(InitializationError));
        assert_eq!(Value::from_any(&()), Err(InitializationError));
        assert_eq!(Value::from_any(&Some(1)), Err(InitializationError));
        assert_eq!(Value::from_any(&vec![1, 2, 3]), Err(InitializationError));
    }

    #[test]
    fn test_classify_array_keeps_order() {
        let arr: AnyArray = vec![
            Box::new(3_i64),
            Box::new("b"),
            Box::new(false),
            Box::new(json!(null)),
            Box::new(vec![Box::new(1.5) as Box<dyn Any>]),
        ];
        let v = Value::from_any(&arr).unwrap();
        assert_eq!(v.len(), arr.len());
        assert_eq!(v, json!([3, "b", false, null, [1.5]]));
    }

    #[test]
    fn test_classify_array_fails_fast() {
        let arr: AnyArray = vec![Box::new(1), Box::new(Opaque), Box::new(2)];
        assert!(Value::from_any(&arr).is_err());

        let nested: AnyArray = vec![Box::new(1), Box::new(vec![Box::new(Opaque) as Box<dyn Any>])];
        assert!(Value::from_any(&nested).is_err());
    }

    #[test]
    fn test_classify_maps() {
        let mut map = AnyMap::new();
        map.insert("a".to_string(), Box::new(1));
        map.insert("b".to_string(), Box::new(json!({"c": null})));
        assert_eq!(
            Value::from_any(&map).unwrap(),
            json!({"a": 1, "b": {"c": null}})
        );

        let mut btree: BTreeMap<String, Box<dyn Any>> = BTreeMap::new();
        btree.insert("x".to_string(), Box::new("y".to_string()));
        assert_eq!(Value::from_any(&btree).unwrap(), json!({"x": "y"}));

        let mut shared: HashMap<String, Box<dyn Any + Send + Sync>> = HashMap::new();
        shared.insert("t".to_string(), Box::new(true));
        assert_eq!(Value::from_any(&shared).unwrap(), json!({"t": true}));

        let mut values: HashMap<String, Value> = HashMap::new();
        values.insert("v".to_string(), json!([1]));
        assert_eq!(Value::from_any(&values).unwrap(), json!({"v": [1]}));

        let mut bad = AnyMap::new();
        bad.insert("ok".to_string(), Box::new(1));
        bad.insert("bad".to_string(), Box::new(Opaque));
        assert_eq!(Value::from_any(&bad), Err(InitializationError));
    }

    #[test]
    fn test_classify_failure_is_logged() {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
            .with_target(false)
            .with_test_writer()
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let nested: AnyArray = vec![Box::new(vec![Box::new(Opaque) as Box<dyn Any>])];
        assert_eq!(Value::from_any(&nested), Err(InitializationError));
    }

    #[test]
    fn test_classify_non_string_keys_rejected() {
        let mut map: HashMap<i32, Box<dyn Any>> = HashMap::new();
        map.insert(1, Box::new(1));
        assert!(Value::from_any(&map).is_err());
    }

    #[test]
    fn test_classify_idempotent() {
        let v = json!({"a": [1, "x", null]});
        assert_eq!(Value::from_any(&v).unwrap(), v);
        let again = Value::from_any(&Value::from_any(&v).unwrap()).unwrap();
        assert_eq!(again, v);

        let elems = vec![json!(1), json!("s")];
        assert_eq!(Value::from_any(&elems).unwrap(), json!([1, "s"]));
    }

    #[test]
    fn test_try_from_box() {
        let boxed: Box<dyn Any> = Box::new(vec![Box::new(2_u16) as Box<dyn Any>]);
        assert_eq!(Value::try_from(boxed).unwrap(), json!([2]));

        let boxed: Box<dyn Any> = Box::new(Opaque);
        assert!(Value::try_from(boxed).is_err());

        let any: &dyn Any = &"s";
        assert_eq!(Value::try_from(any).unwrap(), "s");
    }
}
