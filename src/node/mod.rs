//! Nested document values and dot-path lookup.
//!
//! # Module Structure
//!
//! ```text
//! node/
//! ├── path.rs    # KeyPath (parsed dot path)
//! ├── pick.rs    # deep_pick / pick_many
//! └── mod.rs     # Node trait + serde_json / toml impls (this file)
//! ```
//!
//! Lookup never fails: a missing key, an out-of-range index, or an attempt
//! to descend into a scalar all produce `None`. A present JSON `null` is a
//! value like any other and is returned as `Some`.

mod path;
mod pick;

pub use path::KeyPath;
pub use pick::{deep_pick, deep_pick_in, pick_many};

use serde_json::Value as JsonValue;
use toml::Value as TomlValue;

// ============================================================================
// Node
// ============================================================================

/// Shape of a node, decided before each descent step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// String-keyed mapping (JSON object, TOML table).
    Mapping,
    /// Integer-indexed sequence (JSON / TOML array).
    Sequence,
    /// Anything that cannot be descended into, including JSON `null`.
    Scalar,
}

/// A value that can be traversed one path segment at a time.
pub trait Node {
    fn kind(&self) -> NodeKind;

    /// Mapping lookup. Only called when `kind()` is `Mapping`.
    fn get_key(&self, key: &str) -> Option<&Self>;

    /// Sequence lookup. Only called when `kind()` is `Sequence`.
    fn get_index(&self, index: usize) -> Option<&Self>;

    /// Descend one segment.
    ///
    /// Sequences accept canonical decimal indices only (`"0"`, `"12"`),
    /// so `"01"` or `"+1"` are absent, as with dynamic property access
    /// on arrays.
    fn child(&self, segment: &str) -> Option<&Self> {
        match self.kind() {
            NodeKind::Mapping => self.get_key(segment),
            NodeKind::Sequence => parse_index(segment).and_then(|i| self.get_index(i)),
            NodeKind::Scalar => None,
        }
    }
}

/// Parse a canonical array index: digits only, no leading zero.
fn parse_index(segment: &str) -> Option<usize> {
    let bytes = segment.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    segment.parse().ok()
}

impl Node for JsonValue {
    fn kind(&self) -> NodeKind {
        match self {
            JsonValue::Object(_) => NodeKind::Mapping,
            JsonValue::Array(_) => NodeKind::Sequence,
            _ => NodeKind::Scalar,
        }
    }

    fn get_key(&self, key: &str) -> Option<&Self> {
        match self {
            JsonValue::Object(map) => map.get(key),
            _ => None,
        }
    }

    fn get_index(&self, index: usize) -> Option<&Self> {
        match self {
            JsonValue::Array(items) => items.get(index),
            _ => None,
        }
    }
}

impl Node for TomlValue {
    fn kind(&self) -> NodeKind {
        match self {
            TomlValue::Table(_) => NodeKind::Mapping,
            TomlValue::Array(_) => NodeKind::Sequence,
            _ => NodeKind::Scalar,
        }
    }

    fn get_key(&self, key: &str) -> Option<&Self> {
        match self {
            TomlValue::Table(table) => table.get(key),
            _ => None,
        }
    }

    fn get_index(&self, index: usize) -> Option<&Self> {
        match self {
            TomlValue::Array(items) => items.get(index),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_kinds() {
        assert_eq!(json!({}).kind(), NodeKind::Mapping);
        assert_eq!(json!([]).kind(), NodeKind::Sequence);
        assert_eq!(json!(1).kind(), NodeKind::Scalar);
        assert_eq!(json!("x").kind(), NodeKind::Scalar);
        assert_eq!(JsonValue::Null.kind(), NodeKind::Scalar);
    }

    #[test]
    fn test_toml_kinds() {
        let doc: TomlValue = toml::from_str("a = 1\nb = [1, 2]\n[c]\nd = true").unwrap();
        assert_eq!(doc.kind(), NodeKind::Mapping);
        assert_eq!(doc["a"].kind(), NodeKind::Scalar);
        assert_eq!(doc["b"].kind(), NodeKind::Sequence);
        assert_eq!(doc["c"].kind(), NodeKind::Mapping);
    }

    #[test]
    fn test_child_mapping() {
        let doc = json!({"a": {"b": 1}});
        assert_eq!(doc.child("a"), Some(&json!({"b": 1})));
        assert_eq!(doc.child("missing"), None);
    }

    #[test]
    fn test_child_sequence_index() {
        let doc = json!(["lettuce", "tomato", "mustard"]);
        assert_eq!(doc.child("0"), Some(&json!("lettuce")));
        assert_eq!(doc.child("2"), Some(&json!("mustard")));
        assert_eq!(doc.child("3"), None);
        assert_eq!(doc.child("first"), None);
    }

    #[test]
    fn test_child_scalar_is_absent() {
        assert_eq!(json!(1).child("a"), None);
        assert_eq!(json!("text").child("0"), None);
        assert_eq!(JsonValue::Null.child("a"), None);
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("42"), Some(42));
        assert_eq!(parse_index(""), None);
        assert_eq!(parse_index("01"), None);
        assert_eq!(parse_index("+1"), None);
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index("1.5"), None);
    }
}
