//! Dotted key paths: `"a.b.c"` addresses `value["a"]["b"]["c"]` through nested objects.

mod from;
pub(crate) mod path;

pub use path::KeyPath;

use crate::value::Value;

/// Walks `path` one object key per step, recursing once per segment.
///
/// Stops with `None` when the current value is not an object, the segment is empty or
/// the key is missing. An empty `path` is a miss as well.
pub(crate) fn walk<'v, S: AsRef<str>>(value: &'v Value, path: &[S]) -> Option<&'v Value> {
    let Value::Object(object) = value else {
        return None;
    };
    let (head, tail) = path.split_first()?;
    let head = head.as_ref();
    if head.is_empty() {
        return None;
    }
    let child = object.get(head)?;
    if tail.is_empty() {
        Some(child)
    } else {
        walk(child, tail)
    }
}
