//! Node index construction
//!
//! The sidebar file's schema is neither documented nor stable across Arc
//! versions, so the scan is deliberately over-inclusive: every level of the
//! document is tried as a pair-map and every nested value is visited, even
//! when that reaches the same subtree twice. Tightening this to a single
//! canonical shape risks silently dropping nodes in the other encoding.

use indexmap::IndexMap;
use serde_json::Value;

use super::entries::to_entries;
use super::node::SidebarNode;

/// Flat index of sidebar nodes keyed by id.
///
/// Insertion-ordered; an id seen again later in the scan overwrites the
/// earlier record (last writer wins) but keeps its original position.
pub type NodeIndex = IndexMap<String, SidebarNode>;

/// Scan the whole decoded document and collect every record that looks like
/// a sidebar node, keyed by the id it was filed under.
pub fn build_node_index(document: &Value) -> NodeIndex {
    let mut index = NodeIndex::new();
    visit(document, &mut index);
    tracing::debug!("indexed {} sidebar nodes", index.len());
    index
}

fn visit(value: &Value, index: &mut NodeIndex) {
    if !value.is_object() && !value.is_array() {
        return;
    }

    // Try the current level as a pair-map
    for (key, payload) in to_entries(value) {
        // One encoding wraps each record in a {"value": ...} level
        let record = payload
            .get("value")
            .filter(|v| !v.is_null())
            .unwrap_or(payload);
        if let Some(node) = SidebarNode::from_value(record) {
            index.insert(key, node);
        }
        // Payloads may hold further nested pair-maps
        visit(payload, index);
    }

    // Also walk plain object properties, for index structures not shaped
    // as pair-maps at all
    if let Value::Object(map) = value {
        for child in map.values() {
            visit(child, index);
        }
    }
}
