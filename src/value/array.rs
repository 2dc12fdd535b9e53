use std::{
    ops::{Deref, Index},
    slice::SliceIndex,
};

use crate::value::node::Value;

/// Array represents a JSON array. Its read APIs are like `&[Value]`.
///
/// An `Array` never changes once built. Build one from a `Vec`, an iterator, or the
/// [`array!`][crate::array] macro.
///
/// # Example
/// ```
/// use generic_json::{array, Array, JsonContainerTrait};
///
/// let arr: Array = generic_json::from_str("[1, 2, 3]").unwrap();
/// assert_eq!(arr[0], 1);
///
/// let arr = array![1, 2, 3];
/// assert_eq!(arr[0], 1);
///
/// let j = generic_json::json!([1, 2, 3]);
/// assert_eq!(j.as_array().unwrap()[0], 1);
/// ```
#[derive(Debug, PartialEq, Clone, Default)]
#[repr(transparent)]
pub struct Array(pub(crate) Vec<Value>);

impl Array {
    /// Constructs a new, empty `Array`.
    #[inline]
    pub const fn new() -> Self {
        Array(Vec::new())
    }

    /// Wraps the array into a [`Value`].
    #[inline]
    pub fn into_value(self) -> Value {
        Value::Array(self)
    }

    /// Returns the element at `index`, or `None` if it is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the elements in their original order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    /// Consumes the array and returns its elements.
    #[inline]
    pub fn into_vec(self) -> Vec<Value> {
        self.0
    }
}

impl Deref for Array {
    type Target = [Value];

    #[inline]
    fn deref(&self) -> &[Value] {
        &self.0
    }
}

impl<I: SliceIndex<[Value]>> Index<I> for Array {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod test {
    use super::Array;
    use crate::{array, json, JsonValueTrait};

    #[test]
    fn test_array_order() {
        let arr: Array = vec![3, 1, 2].into();
        assert_eq!(arr.len(), 3);
        let got: Vec<i64> = arr.iter().filter_map(|v| v.as_i64()).collect();
        assert_eq!(got, vec![3, 1, 2]);
        assert_eq!(arr.get(3), None);
        assert_eq!(&arr[1..], &[json!(1), json!(2)][..]);
    }

    #[test]
    fn test_array_empty() {
        let arr = Array::new();
        assert!(arr.is_empty());
        assert!(arr.get(0).is_none());
        assert_eq!(arr.into_value(), json!([]));
    }

    #[test]
    fn test_array_into_iter() {
        let arr = array![true, null, "hi"];
        let mut iter = arr.into_iter();
        assert!(iter.next().is_true());
        assert!(iter.next().unwrap().is_null());
        assert_eq!(iter.next().as_str(), Some("hi"));
        assert!(iter.next().is_none());
    }
}
