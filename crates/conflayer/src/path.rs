//! Dotted-path access over nested configuration mappings.
//!
//! Responsibilities:
//! - Resolve `.`-delimited paths to values in a [`ConfigMap`].
//! - Create, overwrite, and remove values at arbitrary depth.
//! - Append and prepend to sequence values addressed by path.
//!
//! Does NOT handle:
//! - Loading or persisting configuration (see the loader and persistence
//!   modules).
//! - Merging mappings (see the value module).
//!
//! Invariants:
//! - Path segments address mappings only; sequences are terminal for
//!   traversal.
//! - Empty segments are literal empty-string keys, never skipped, so
//!   `"a..b"` looks up `""` inside `"a"`.
//! - Lookups never mutate; `set` is the only operation that creates
//!   intermediate mappings.
//! - Surviving keys keep their insertion order after removal.

use serde_json::Value;

use crate::value::ConfigMap;

/// Resolve `path` to a value, if every segment exists.
///
/// Returns `None` when a segment is missing or when traversal reaches a
/// non-mapping value before the path is exhausted. A present null is
/// `Some(&Value::Null)`, not `None`.
pub fn get<'a>(map: &'a ConfigMap, path: &str) -> Option<&'a Value> {
    match path.split_once('.') {
        None => map.get(path),
        Some((head, rest)) => get(map.get(head)?.as_object()?, rest),
    }
}

/// Whether `path` resolves to any value, including null and empty
/// containers.
pub fn has(map: &ConfigMap, path: &str) -> bool {
    get(map, path).is_some()
}

/// Write `value` at `path`, creating intermediate mappings as needed.
///
/// A non-mapping value sitting where an intermediate segment needs a
/// mapping is overwritten with an empty one, so `set` cannot fail.
pub fn set(map: &mut ConfigMap, path: &str, value: Value) {
    match path.split_once('.') {
        None => {
            map.insert(path.to_owned(), value);
        }
        Some((head, rest)) => {
            if !matches!(map.get(head), Some(Value::Object(_))) {
                map.insert(head.to_owned(), Value::Object(ConfigMap::new()));
            }
            if let Some(Value::Object(inner)) = map.get_mut(head) {
                set(inner, rest, value);
            }
        }
    }
}

/// Remove the value at `path` if it resolves.
///
/// Missing segments and non-mapping intermediates make this a no-op, not
/// an error.
pub fn forget(map: &mut ConfigMap, path: &str) {
    match path.split_once('.') {
        None => {
            // shift_remove keeps the surviving keys in insertion order.
            map.shift_remove(path);
        }
        Some((head, rest)) => {
            if let Some(Value::Object(inner)) = map.get_mut(head) {
                forget(inner, rest);
            }
        }
    }
}

/// Append `value` to the sequence at `path`.
///
/// A missing path or a non-sequence value there starts a fresh sequence,
/// so the result always ends with `value`.
pub fn push(map: &mut ConfigMap, path: &str, value: Value) {
    let mut items = sequence_at(map, path);
    items.push(value);
    set(map, path, Value::Array(items));
}

/// Insert `value` at the front of the sequence at `path`.
pub fn prepend(map: &mut ConfigMap, path: &str, value: Value) {
    let mut items = sequence_at(map, path);
    items.insert(0, value);
    set(map, path, Value::Array(items));
}

/// Clone of the sequence at `path`, empty when the path is missing or
/// holds a non-sequence value.
fn sequence_at(map: &ConfigMap, path: &str) -> Vec<Value> {
    match get(map, path) {
        Some(Value::Array(items)) => items.clone(),
        _ => Vec::new(),
    }
}
