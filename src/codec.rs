//! JSON text in and out. serde_json does the parsing and printing; its errors are
//! returned unchanged.

use serde::{Deserialize, Serialize};

use crate::{
    config::{EncodeOptions, SerializeCfg},
    error::Result,
    value::{ser::SerializeValue, JsonValueTrait, Value},
};

/// Deserialize an instance of type `T` from bytes of JSON text.
#[inline]
pub fn from_slice<'a, T>(json: &'a [u8]) -> Result<T>
where
    T: Deserialize<'a>,
{
    serde_json::from_slice(json)
}

/// Deserialize an instance of type `T` from a string of JSON text.
#[inline]
pub fn from_str<'a, T>(json: &'a str) -> Result<T>
where
    T: Deserialize<'a>,
{
    serde_json::from_str(json)
}

/// Decodes JSON bytes into a [`Value`]. Every number becomes an `f64`.
///
/// # Examples
///
/// ```
/// use generic_json::{decode, json};
///
/// let v = decode(br#"{"a": [1, 2.5, null]}"#).unwrap();
/// assert_eq!(v, json!({"a": [1, 2.5, null]}));
///
/// assert!(decode(b"[1,").is_err());
/// ```
#[inline]
pub fn decode(json: &[u8]) -> Result<Value> {
    from_slice(json)
}

/// Encodes a [`Value`] as compact JSON.
///
/// This cannot fail: object keys are always strings, and NaN or infinity encode as
/// `null`.
///
/// # Examples
///
/// ```
/// use generic_json::{encode, json};
///
/// assert_eq!(encode(&json!([1, "a", null])), br#"[1,"a",null]"#);
/// ```
#[inline]
pub fn encode(value: &Value) -> Vec<u8> {
    encode_with(value, EncodeOptions::default())
}

/// Encodes a [`Value`] with explicit [`EncodeOptions`].
///
/// # Examples
///
/// ```
/// use generic_json::{encode_with, json, EncodeOptions};
///
/// let v = json!({"b": 1, "a": 2});
/// let out = encode_with(&v, EncodeOptions::new().sort_keys(true));
/// assert_eq!(out, br#"{"a":2,"b":1}"#);
/// ```
pub fn encode_with(value: &Value, opts: EncodeOptions) -> Vec<u8> {
    let value = SerializeValue::new(value, SerializeCfg::from(opts));
    let out = if opts.pretty {
        serde_json::to_vec_pretty(&value)
    } else {
        serde_json::to_vec(&value)
    };
    // Writing to a `Vec` only fails for non-string map keys, which a `Value` cannot hold.
    out.unwrap_or_else(|err| {
        debug_assert!(false, "encoding a Value failed: {err}");
        tracing::error!(error = %err, "encoding a Value failed");
        Vec::new()
    })
}

/// Serialize the given data structure as a JSON byte vector.
#[inline]
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    serde_json::to_vec(value)
}

/// Serialize the given data structure as a String of JSON.
#[inline]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    serde_json::to_string(value)
}

/// Serialize the given data structure as a pretty-printed String of JSON.
#[inline]
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    serde_json::to_string_pretty(value)
}

/// Decodes `json` and returns an owned copy of the value at the dotted key `path`.
///
/// Returns `Ok(None)` when the text is valid JSON but the path does not resolve.
///
/// # Examples
///
/// ```
/// use generic_json::get_from_slice;
///
/// let json = br#"{"a": {"b": ["x", "y"]}}"#;
/// let got = get_from_slice(json, "a.b").unwrap().unwrap();
/// assert_eq!(got[1], "y");
///
/// assert!(get_from_slice(json, "a.c").unwrap().is_none());
/// assert!(get_from_slice(b"{", "a").is_err());
/// ```
pub fn get_from_slice(json: &[u8], path: &str) -> Result<Option<Value>> {
    let root = decode(json)?;
    Ok(root.key_path(path).cloned())
}

#[cfg(test)]
mod test {
    use serde::{Deserialize, Serialize};

    use super::*;
    use crate::{json, to_value, EncodeOptions};

    #[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
    struct Record {
        id: u32,
        name: String,
        score: f64,
        tags: Vec<String>,
        parent: Option<Box<Record>>,
    }

    fn record() -> Record {
        Record {
            id: 7,
            name: "seven".into(),
            score: 0.5,
            tags: vec!["a".into(), "b".into()],
            parent: Some(Box::new(Record::default())),
        }
    }

    #[test]
    fn test_round_trip() {
        let v = json!({
            "s": "quote \" and \\ and \u{1F600}",
            "n": [0, -1, 1.5, 1e-7, 9007199254740991_i64],
            "nested": {"empty": {}, "list": [[], null, true]},
        });
        let back = decode(&encode(&v)).unwrap();
        assert_eq!(back, v);

        let pretty = encode_with(&v, EncodeOptions::new().pretty(true));
        assert_eq!(decode(&pretty).unwrap(), v);
    }

    #[test]
    fn test_to_value_matches_codec() {
        let rec = record();
        let through_codec = decode(&to_vec(&rec).unwrap()).unwrap();
        assert_eq!(to_value(&rec).unwrap(), through_codec);

        let back: Record = from_slice(&encode(&through_codec)).unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn test_encode_numbers() {
        assert_eq!(encode(&json!([1, -0.5, 100])), b"[1,-0.5,100]");
        assert_eq!(encode(&Value::new_f64(f64::INFINITY)), b"null");
        assert_eq!(to_string(&Value::new_f64(f64::NAN)).unwrap(), "null");
    }

    #[test]
    fn test_encode_sort_keys() {
        let v = json!({"zeta": 1, "alpha": {"y": 2, "x": 1}, "mid": [{"b": 0, "a": 0}]});
        let out = encode_with(&v, EncodeOptions::new().sort_keys(true));
        assert_eq!(
            out,
            br#"{"alpha":{"x":1,"y":2},"mid":[{"a":0,"b":0}],"zeta":1}"#
        );

        let pretty = encode_with(&v, EncodeOptions::new().sort_keys(true).pretty(true));
        let text = String::from_utf8(pretty).unwrap();
        assert!(text.find("alpha").unwrap() < text.find("zeta").unwrap());
        assert!(text.contains('\n'));
    }

    #[test]
    fn test_encode_never_empty() {
        let values = [
            Value::Null,
            Value::new_f64(f64::NAN),
            json!(""),
            json!([]),
            json!({}),
            json!({"": {"": [null]}}),
        ];
        for v in &values {
            for opts in [
                EncodeOptions::new(),
                EncodeOptions::new().pretty(true),
                EncodeOptions::new().sort_keys(true),
            ] {
                let out = encode_with(v, opts);
                assert!(!out.is_empty());
                let back = decode(&out).unwrap();
                if v.as_f64().is_some_and(f64::is_nan) {
                    assert!(back.is_null());
                } else {
                    assert_eq!(&back, v);
                }
            }
        }
    }

    #[test]
    fn test_decode_errors_pass_through() {
        let err = decode(b"{\"a\": tru}").unwrap_err();
        assert!(err.is_syntax());
        assert_eq!(err.line(), 1);

        let err = from_str::<Value>("").unwrap_err();
        assert!(err.is_eof());
    }

    #[test]
    fn test_get_from_slice() {
        let json = br#"{"a": {"b": {"c": 42}}, "n": null}"#;
        assert_eq!(get_from_slice(json, "a.b.c").unwrap(), Some(json!(42)));
        assert_eq!(get_from_slice(json, "n").unwrap(), Some(Value::Null));
        assert_eq!(get_from_slice(json, "a.b.c.d").unwrap(), None);
        assert_eq!(get_from_slice(json, "").unwrap(), None);
    }

    #[test]
    fn test_to_string() {
        let v = json!({"k": [true]});
        assert_eq!(to_string(&v).unwrap(), r#"{"k":[true]}"#);
        assert_eq!(to_string_pretty(&v).unwrap(), "{\n  \"k\": [\n    true\n  ]\n}");
        assert_eq!(to_vec(&v).unwrap(), br#"{"k":[true]}"#);
    }
}
