//! Config field path used in diagnostics.

use owo_colors::{OwoColorize, Stream};
use std::fmt;

/// Dotted location of a config field, e.g. `clock.interval_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(&'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            format!("`{}`", self.0).if_supports_color(Stream::Stderr, |s| s.cyan())
        )
    }
}
