use arbitrary::Arbitrary;
use generic_json::{
    decode, encode, from_slice, JsonContainerTrait, JsonValueTrait, KeyPath, Value,
};
use serde_json::Value as JValue;

/// Decodes `data` with both serde_json's own `Value` and ours, checks that they agree,
/// then checks that encoding and decoding again gives back the same tree.
pub fn generic_json_fuzz_data(data: &[u8]) {
    match serde_json::from_slice::<JValue>(data) {
        Ok(jv) => {
            let gv: Value = from_slice(data).unwrap();
            compare_value(&jv, &gv);

            let out = encode(&gv);
            let gv2 = decode(&out).unwrap();
            assert_eq!(gv, gv2, "round trip of {:?}", String::from_utf8_lossy(data));
        }
        Err(_) => {
            let _ = decode(data).expect_err(&format!("parse invalid json {data:?} wrong"));
        }
    }
}

pub fn compare_value(jv: &JValue, gv: &Value) {
    match jv {
        JValue::Object(obj) => {
            let gobj = gv.as_object().unwrap();
            assert_eq!(obj.len(), gobj.len());
            for (k, v) in obj {
                compare_value(v, gobj.get(k).unwrap());
            }
        }
        JValue::Array(arr) => {
            let garr = gv.as_array().unwrap();
            assert_eq!(arr.len(), garr.len());
            for (v, got) in arr.iter().zip(garr) {
                compare_value(v, got);
            }
        }
        JValue::Bool(b) => assert_eq!(gv.as_bool(), Some(*b)),
        JValue::Null => assert!(gv.is_null()),
        JValue::Number(num) => {
            // integers beyond 2^53 are lossy on both sides of the `as` conversion
            let jf = num.as_f64().unwrap();
            let gf = gv.as_f64().unwrap();
            assert_eq!(jf, gf, "jf {jf} gf {gf}");
        }
        JValue::String(s) => assert_eq!(gv.as_str(), Some(s.as_str())),
    }
}

/// A document plus a key path to look up in it.
#[derive(Debug, Arbitrary)]
pub struct KeyPathInput {
    pub json: String,
    pub path: Vec<String>,
}

/// The dotted key path walk must agree with chained `get` calls on every document, and
/// with the pre-split `KeyPath` form.
pub fn generic_json_fuzz_key_path(input: &KeyPathInput) {
    let Ok(root) = decode(input.json.as_bytes()) else {
        return;
    };

    let by_segments = root.query_key_path(&input.path);

    let mut by_get = if input.path.is_empty() { None } else { Some(&root) };
    for seg in &input.path {
        by_get = match by_get {
            Some(v) if v.is_object() && !seg.is_empty() => v.get(seg.as_str()),
            _ => None,
        };
    }
    assert_eq!(by_segments, by_get);

    let path: KeyPath = input.path.iter().cloned().collect();
    assert_eq!(root.lookup(&path), by_get);

    if input.path.iter().all(|seg| !seg.contains('.')) {
        assert_eq!(root.key_path(&input.path.join(".")), by_get);
    }
}
