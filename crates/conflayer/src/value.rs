//! Value model shared across the crate.
//!
//! Configuration data is a nested, heterogeneous mapping. `serde_json`'s
//! value type covers the scalar, sequence, and mapping shapes needed here,
//! and the `preserve_order` feature keeps mapping keys in insertion order.

use serde_json::Value;

/// Nested configuration mapping keyed by string segments.
///
/// Keys are case-sensitive and iterate in insertion order. Values may be
/// scalars, sequences, or further mappings, nested to any depth.
pub type ConfigMap = serde_json::Map<String, Value>;

/// Merge `overlay` onto `base`, with overlay values taking precedence.
///
/// Mappings merge key by key, recursively. Sequences and scalars are
/// replaced wholesale. A null overlay value leaves the base value in place,
/// so an overlay file can mention a key without erasing it.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base), Value::Object(overlay)) => {
            merge_maps(&mut base, overlay);
            Value::Object(base)
        }
        (base, Value::Null) => base,
        (_, overlay) => overlay,
    }
}

/// Merge `overlay` into `base` at the top level, recursing per key.
///
/// Existing keys keep their position in `base`; keys new to `base` are
/// appended in the order the overlay yields them.
pub fn merge_maps(base: &mut ConfigMap, overlay: ConfigMap) {
    for (key, incoming) in overlay {
        match base.get_mut(&key) {
            Some(existing) => {
                let merged = deep_merge(existing.take(), incoming);
                *existing = merged;
            }
            None => {
                base.insert(key, incoming);
            }
        }
    }
}

/// Fold a sequence of mappings into one, later mappings taking precedence.
pub fn merge_all(layers: impl IntoIterator<Item = ConfigMap>) -> ConfigMap {
    let mut merged = ConfigMap::new();
    for layer in layers {
        merge_maps(&mut merged, layer);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> ConfigMap {
        match value {
            Value::Object(map) => map,
            other => panic!("expected mapping, got {other:?}"),
        }
    }

    #[test]
    fn overlay_wins_on_scalar_conflict() {
        let merged = deep_merge(json!({"a": 1, "b": 2}), json!({"b": 3, "c": 4}));
        assert_eq!(merged, json!({"a": 1, "b": 3, "c": 4}));
    }

    #[test]
    fn nested_mappings_merge_recursively() {
        let base = json!({"server": {"host": "localhost", "port": 8080}, "debug": true});
        let overlay = json!({"server": {"port": 9000}});
        let merged = deep_merge(base, overlay);
        assert_eq!(
            merged,
            json!({"server": {"host": "localhost", "port": 9000}, "debug": true})
        );
    }

    #[test]
    fn sequences_are_replaced_not_concatenated() {
        let merged = deep_merge(json!({"items": [1, 2, 3]}), json!({"items": [4]}));
        assert_eq!(merged, json!({"items": [4]}));
    }

    #[test]
    fn null_overlay_preserves_base() {
        let merged = deep_merge(json!({"a": 1, "b": {"c": 2}}), json!({"a": null, "b": {"c": null}}));
        assert_eq!(merged, json!({"a": 1, "b": {"c": 2}}));
    }

    #[test]
    fn mapping_replaces_scalar_and_back() {
        assert_eq!(
            deep_merge(json!({"v": 42}), json!({"v": {"nested": true}})),
            json!({"v": {"nested": true}})
        );
        assert_eq!(
            deep_merge(json!({"v": {"nested": true}}), json!({"v": 42})),
            json!({"v": 42})
        );
    }

    #[test]
    fn merge_keeps_existing_key_positions() {
        let mut base = as_map(json!({"first": 1, "second": 2, "third": 3}));
        let overlay = as_map(json!({"second": 20, "fourth": 4}));
        merge_maps(&mut base, overlay);

        let keys: Vec<&str> = base.keys().map(String::as_str).collect();
        assert_eq!(keys, ["first", "second", "third", "fourth"]);
        assert_eq!(base["second"], json!(20));
    }

    #[test]
    fn merge_all_applies_layers_in_order() {
        let layers = vec![
            as_map(json!({"a": 1})),
            as_map(json!({"b": 2})),
            as_map(json!({"a": 3, "c": 4})),
        ];
        assert_eq!(Value::Object(merge_all(layers)), json!({"a": 3, "b": 2, "c": 4}));
    }
}
