//! Sidebar node model
//!
//!

use serde::Serialize;
use serde_json::Value;

/// One item in the sidebar tree: a folder, a saved tab, or a container.
///
/// All fields are optional on disk; absence is meaningful (a node without
/// `parent_id` is root-level). Field values of the wrong JSON type and empty
/// strings are treated as absent rather than rejected; the file format is
/// owned by the browser and changes between versions.
#[derive(Debug, Clone, Serialize)]
pub struct SidebarNode {
    /// The node's own id, when the record carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display title, used as one path segment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Id of the parent node; `None` marks a tree root.
    #[serde(rename = "parentID", skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Ordered child ids, when the record carries them.
    #[serde(rename = "childrenIds", skip_serializing_if = "Vec::is_empty")]
    pub children_ids: Vec<String>,
    /// URL persisted for a saved/pinned tab (`data.tab.savedURL` on disk).
    #[serde(rename = "savedURL", skip_serializing_if = "Option::is_none")]
    pub saved_url: Option<String>,
    /// Title persisted for a saved/pinned tab (`data.tab.savedTitle` on disk).
    #[serde(rename = "savedTitle", skip_serializing_if = "Option::is_none")]
    pub saved_title: Option<String>,
}

impl SidebarNode {
    /// Probe a raw JSON value and build a node from it if it qualifies.
    ///
    /// A value "looks like a node" when it is an object carrying a `title`
    /// key, a `parentID` key, or a non-empty `data.tab.savedURL`. Anything
    /// else yields `None` and is skipped by the indexer.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;

        let saved_url = tab_str(value, "savedURL");
        let looks_like_node =
            obj.contains_key("title") || obj.contains_key("parentID") || saved_url.is_some();
        if !looks_like_node {
            return None;
        }

        Some(SidebarNode {
            id: str_field(value, "id"),
            title: str_field(value, "title"),
            parent_id: str_field(value, "parentID"),
            children_ids: value
                .get("childrenIds")
                .and_then(Value::as_array)
                .map(|ids| {
                    ids.iter()
                        .filter_map(Value::as_str)
                        .map(str::to_owned)
                        .collect()
                })
                .unwrap_or_default(),
            saved_url,
            saved_title: tab_str(value, "savedTitle"),
        })
    }
}

/// Top-level string field, absent when missing, non-string, or empty.
fn str_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// String field nested under the `data.tab` wrapper.
fn tab_str(value: &Value, key: &str) -> Option<String> {
    value
        .get("data")
        .and_then(|d| d.get("tab"))
        .and_then(|t| t.get(key))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}
