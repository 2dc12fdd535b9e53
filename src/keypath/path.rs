use std::{fmt, str::FromStr};

use faststr::FastStr;

use crate::error::KeyPathError;

/// A key path that has been split and checked once, for repeated lookups with
/// [`Value::lookup`][crate::Value::lookup].
///
/// You can use `key_path!["a", "b"]` to build one from segments, or parse it from the
/// dotted form `"a.b"`. Segments are taken literally: a segment built from segments may
/// itself contain a `.`.
///
/// # Examples
/// ```
/// use generic_json::{json, key_path, KeyPath};
///
/// let v = json!({"a": {"b.c": 1, "b": {"c": 2}}});
///
/// let dotted: KeyPath = "a.b.c".parse().unwrap();
/// assert_eq!(v.lookup(&dotted).unwrap(), 2);
///
/// let literal = key_path!["a", "b.c"];
/// assert_eq!(v.lookup(&literal).unwrap(), 1);
///
/// assert!("a..c".parse::<KeyPath>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct KeyPath {
    pub(super) segments: Vec<FastStr>,
}

impl KeyPath {
    /// Splits a dotted path. Returns `None` for an empty path or an empty segment.
    pub fn parse(path: &str) -> Option<Self> {
        path.parse().ok()
    }

    pub fn segments(&self) -> &[FastStr] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns a new path with `segment` appended.
    pub fn join(&self, segment: impl Into<FastStr>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        KeyPath { segments }
    }
}

impl FromStr for KeyPath {
    type Err = KeyPathError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        if path.is_empty() {
            return Err(KeyPathError::Empty);
        }
        let segments = path
            .split('.')
            .enumerate()
            .map(|(index, seg)| {
                if seg.is_empty() {
                    Err(KeyPathError::EmptySegment { index })
                } else {
                    Ok(FastStr::new(seg))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(KeyPath { segments })
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(seg.as_str())?;
        }
        Ok(())
    }
}

#[macro_export]
macro_rules! key_path {
    () => (
        $crate::KeyPath::default()
    );
    ($($x:expr),+ $(,)?) => (
        $crate::KeyPath::from(<[_]>::into_vec(
            std::boxed::Box::new([$($crate::__private::FastStr::from($x)),+])
        ))
    );
}

#[cfg(test)]
mod test {
    use super::KeyPath;
    use crate::{error::KeyPathError, json};

    #[test]
    fn test_parse_key_path() {
        let path: KeyPath = "a.b.c".parse().unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.to_string(), "a.b.c");
        assert_eq!(path, key_path!["a", "b", "c"]);

        assert_eq!("".parse::<KeyPath>(), Err(KeyPathError::Empty));
        assert_eq!(
            "a..b".parse::<KeyPath>(),
            Err(KeyPathError::EmptySegment { index: 1 })
        );
        assert_eq!(
            ".a".parse::<KeyPath>(),
            Err(KeyPathError::EmptySegment { index: 0 })
        );
        assert_eq!(
            "a.".parse::<KeyPath>(),
            Err(KeyPathError::EmptySegment { index: 1 })
        );
        assert!(KeyPath::parse("a").is_some());
        assert!(KeyPath::parse("").is_none());
    }

    #[test]
    fn test_lookup() {
        let v = json!({"a": {"b": {"c": 42}}});
        let path = key_path!["a", "b"];
        assert_eq!(v.lookup(&path).unwrap(), &json!({"c": 42}));
        assert_eq!(v.lookup(&path.join("c")).unwrap(), 42);
        assert!(v.lookup(&path.join("x")).is_none());
        assert!(v.lookup(&key_path![]).is_none());
        assert!(v.lookup(&key_path!["a", ""]).is_none());
    }
}
