use faststr::FastStr;

use super::KeyPath;

impl From<Vec<FastStr>> for KeyPath {
    fn from(segments: Vec<FastStr>) -> Self {
        KeyPath { segments }
    }
}

impl From<&[&str]> for KeyPath {
    fn from(segments: &[&str]) -> Self {
        KeyPath {
            segments: segments.iter().map(FastStr::new).collect(),
        }
    }
}

impl<const N: usize> From<[&str; N]> for KeyPath {
    fn from(segments: [&str; N]) -> Self {
        KeyPath {
            segments: segments.iter().map(FastStr::new).collect(),
        }
    }
}

impl FromIterator<String> for KeyPath {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        KeyPath {
            segments: iter.into_iter().map(FastStr::from).collect(),
        }
    }
}
