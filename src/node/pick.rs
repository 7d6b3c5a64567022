//! Recursive dot-path lookup.

use super::{KeyPath, Node};

/// Resolve a dot-separated `fields` path against `root`.
///
/// Takes the first segment, looks it up in `root`, and recurses with the
/// remaining segments until none are left. Any missing step yields `None`.
///
/// # Example
///
/// ```
/// use pathpipe::node::deep_pick;
/// use serde_json::json;
///
/// let dan = json!({
///     "type": "person",
///     "data": { "info": { "fullname": { "first": "Dan", "last": "Deacon" } } }
/// });
///
/// assert_eq!(deep_pick("type", &dan), Some(&json!("person")));
/// assert_eq!(deep_pick("data.info.fullname.first", &dan), Some(&json!("Dan")));
/// assert_eq!(deep_pick("data.info.age", &dan), None);
/// ```
pub fn deep_pick<'a, N: Node>(fields: &str, root: &'a N) -> Option<&'a N> {
    match fields.split_once(KeyPath::SEPARATOR) {
        Some((first, remaining)) => root
            .child(first)
            .and_then(|next| deep_pick(remaining, next)),
        None => root.child(fields),
    }
}

/// Like [`deep_pick`], with an optional root.
///
/// A missing root behaves as an empty mapping: every path is absent.
#[inline]
pub fn deep_pick_in<'a, N: Node>(fields: &str, root: Option<&'a N>) -> Option<&'a N> {
    root.and_then(|node| deep_pick(fields, node))
}

/// Resolve several paths against one root, keeping input order.
pub fn pick_many<'a, 'p, N, I>(paths: I, root: &'a N) -> Vec<(&'p str, Option<&'a N>)>
where
    N: Node,
    I: IntoIterator<Item = &'p str>,
{
    paths
        .into_iter()
        .map(|path| (path, deep_pick(path, root)))
        .collect()
}
