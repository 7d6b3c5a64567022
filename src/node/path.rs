//! Parsed dot-separated key path.

use std::fmt;
use std::str::FromStr;

use super::Node;

/// A dot-separated key path, split into segments.
///
/// Splitting is literal: segments are never trimmed and empty segments are
/// kept, so `""` is one empty segment and `"a."` is `["a", ""]`.
///
/// # Example
///
/// ```
/// use pathpipe::node::KeyPath;
///
/// let path = KeyPath::parse("data.info.fullname.first");
/// assert_eq!(path.len(), 4);
/// assert_eq!(path.to_string(), "data.info.fullname.first");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    pub const SEPARATOR: char = '.';

    pub fn parse(path: &str) -> Self {
        Self {
            segments: path.split(Self::SEPARATOR).map(str::to_owned).collect(),
        }
    }

    #[inline]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`; kept for clippy's `len_without_is_empty`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Resolve this path against `root`, one segment per step.
    pub fn resolve<'a, N: Node>(&self, root: &'a N) -> Option<&'a N> {
        self.segments
            .iter()
            .try_fold(root, |node, segment| node.child(segment))
    }
}

impl FromStr for KeyPath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", Self::SEPARATOR)?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}
