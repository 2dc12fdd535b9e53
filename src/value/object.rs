//! Represents a parsed JSON object.
use std::{collections::HashMap, ops::Index};

use ahash::RandomState;
use faststr::FastStr;

use crate::value::node::Value;

pub(crate) type Map = HashMap<FastStr, Value, RandomState>;

/// Represents the JSON object. The inner implementation is a hash map, so the order of
/// keys is unspecified and may differ between two equal objects.
///
/// An `Object` never changes once built. Build one from key/value pairs, a map, or the
/// [`object!`][crate::object] macro.
///
/// # Example
/// ```
/// use generic_json::{object, Object};
///
/// let obj = object! {"a": 1, "b": true, "c": null};
///
/// assert_eq!(obj["a"], 1);
/// assert_eq!(obj.get(&"b").unwrap(), &true);
/// assert!(obj.get(&"d").is_none());
/// ```
#[derive(Debug, PartialEq, Clone, Default)]
#[repr(transparent)]
pub struct Object(pub(crate) Map);

impl Object {
    /// Returns the inner [`Value`].
    #[inline]
    pub fn into_value(self) -> Value {
        Value::Object(self)
    }

    /// Create a new empty object.
    #[inline]
    pub fn new() -> Object {
        Object(Map::default())
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// A key mapped to `null` returns `Some(&Value::Null)`, a missing key returns `None`.
    ///
    /// # Examples
    /// ```
    /// use generic_json::{object, JsonValueTrait};
    ///
    /// let obj = object! {"a": 1, "b": null};
    /// assert_eq!(obj.get(&"a").unwrap(), 1);
    /// assert!(obj.get(&"b").unwrap().is_null());
    /// assert!(obj.get(&"c").is_none());
    /// ```
    #[inline]
    pub fn get<Q: AsRef<str> + ?Sized>(&self, key: &Q) -> Option<&Value> {
        self.0.get(key.as_ref())
    }

    /// Returns `true` if the map contains a value for the specified key.
    #[inline]
    pub fn contains_key<Q: AsRef<str> + ?Sized>(&self, key: &Q) -> bool {
        self.0.contains_key(key.as_ref())
    }

    /// Returns the key-value pair corresponding to the supplied key.
    #[inline]
    pub fn get_key_value<Q: AsRef<str> + ?Sized>(&self, key: &Q) -> Option<(&str, &Value)> {
        self.0
            .get_key_value(key.as_ref())
            .map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of key-value pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the object contains no key-value pairs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the pairs, in no particular order.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.0.iter())
    }

    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(FastStr::as_str)
    }

    #[inline]
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.0.values()
    }

    /// Returns the pairs sorted by key.
    pub(crate) fn sorted_entries(&self) -> Vec<(&FastStr, &Value)> {
        let mut entries: Vec<_> = self.0.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.as_str().cmp(b.0.as_str()));
        entries
    }
}

impl<Q: AsRef<str> + ?Sized> Index<&Q> for Object {
    type Output = Value;

    /// Panics if the key is not present.
    #[inline]
    fn index(&self, index: &Q) -> &Self::Output {
        let key = index.as_ref();
        self.get(key)
            .unwrap_or_else(|| panic!("no entry found for key {key:?}"))
    }
}

/// An iterator over the `(&str, &Value)` pairs of an [`Object`].
pub struct Iter<'a>(std::collections::hash_map::Iter<'a, FastStr, Value>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Object {
    type Item = (FastStr, Value);
    type IntoIter = std::collections::hash_map::IntoIter<FastStr, Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
