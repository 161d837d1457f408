//! Pair-map entry decoding
//!
//! `StorableSidebar.json` stores id → record collections in two shapes,
//! depending on the browser version: a plain JSON object, or a flattened
//! array alternating `[id, record, id, record, ...]`. Both decode to the
//! same ordered entry sequence here.

use serde_json::Value;

/// Decode a JSON value as an ordered sequence of `(key, payload)` pairs.
///
/// - object: one pair per property, in the object's own order;
/// - array: alternating key/payload elements, a trailing unpaired element
///   is dropped;
/// - anything else: empty.
pub fn to_entries(root: &Value) -> Vec<(String, &Value)> {
    match root {
        // chunks_exact(2) drops a trailing unpaired element, as required
        Value::Array(items) => items
            .chunks_exact(2)
            .map(|pair| (key_string(&pair[0]), &pair[1]))
            .collect(),
        Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
        _ => Vec::new(),
    }
}

/// Coerce an array key element to a string. Keys are strings in every
/// observed file; anything else falls back to its compact JSON rendering
/// (`7`, `{"x":1}`) purely to keep the decoder total. Such keys never
/// match a real node id, so the rendering itself carries no meaning.
fn key_string(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_owned(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_entries_keep_order() {
        let root = json!({"a": {"x": 1}, "b": {"y": 2}});
        let entries = to_entries(&root);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, "a");
        assert_eq!(entries[0].1, &json!({"x": 1}));
        assert_eq!(entries[1].0, "b");
        assert_eq!(entries[1].1, &json!({"y": 2}));
    }

    #[test]
    fn test_alternating_array_entries() {
        let root = json!(["a", {"x": 1}, "b", {"y": 2}]);
        let entries = to_entries(&root);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, "a");
        assert_eq!(entries[1].0, "b");
        assert_eq!(entries[1].1, &json!({"y": 2}));
    }

    #[test]
    fn test_odd_array_drops_trailing_element() {
        let root = json!(["a", {"x": 1}, "b"]);
        let entries = to_entries(&root);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, "a");
    }

    #[test]
    fn test_non_string_keys_are_coerced() {
        let root = json!([7, {"x": 1}]);
        let entries = to_entries(&root);

        assert_eq!(entries[0].0, "7");
    }

    #[test]
    fn test_scalars_yield_nothing() {
        assert!(to_entries(&json!(null)).is_empty());
        assert!(to_entries(&json!(3)).is_empty());
        assert!(to_entries(&json!("s")).is_empty());
    }
}
