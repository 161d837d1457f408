//! URL → folder-path multimap
//!
//!

use indexmap::IndexMap;

use super::index::NodeIndex;
use super::path::build_path_by_id;

/// Normalized URL mapped to every folder path it is saved under, in
/// index-discovery order. One URL can appear in several sidebar locations;
/// repeated identical paths are kept as-is.
pub type UrlPathMap = IndexMap<String, Vec<String>>;

/// Strip a trailing `#fragment` from a URL.
///
/// Only the fragment goes; query strings carry meaningful state on many
/// real-world URLs (`console.cloud.google.com` and friends) and must
/// survive verbatim. Total over all strings and idempotent.
pub fn normalize_url(url: &str) -> String {
    match url.find('#') {
        Some(pos) => url[..pos].to_owned(),
        None => url.to_owned(),
    }
}

/// Build the URL → paths multimap from a node index.
pub fn build_url_to_paths(index: &NodeIndex) -> UrlPathMap {
    let mut map = UrlPathMap::new();

    for (id, node) in index {
        let Some(saved_url) = node.saved_url.as_deref() else {
            continue;
        };

        let url = normalize_url(saved_url);
        let path = build_path_by_id(index, id);
        map.entry(url).or_default().push(path);
    }

    tracing::debug!("mapped {} distinct saved URLs", map.len());
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sidebar::index::build_node_index;
    use serde_json::json;

    #[test]
    fn test_normalize_strips_fragment_only() {
        assert_eq!(normalize_url("https://a.com/x#frag"), "https://a.com/x");
        assert_eq!(normalize_url("https://a.com/x?q=1"), "https://a.com/x?q=1");
        assert_eq!(
            normalize_url("https://a.com/x?q=1#a#b"),
            "https://a.com/x?q=1"
        );
        assert_eq!(normalize_url(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for u in ["https://a.com/x#frag", "https://a.com/x", "#", ""] {
            assert_eq!(normalize_url(&normalize_url(u)), normalize_url(u));
        }
    }

    #[test]
    fn test_same_url_in_two_folders() {
        let doc = json!({
            "root": {"title": "Home"},
            "f1": {"title": "Work", "parentID": "root"},
            "f2": {"title": "Play", "parentID": "root"},
            "t1": {
                "parentID": "f1",
                "data": {"tab": {"savedURL": "https://a.com/x#sec"}}
            },
            "t2": {
                "parentID": "f2",
                "data": {"tab": {"savedURL": "https://a.com/x"}}
            }
        });
        let map = build_url_to_paths(&build_node_index(&doc));

        assert_eq!(map.len(), 1);
        assert_eq!(map["https://a.com/x"][..], ["Home/Work", "Home/Play"][..]);
    }

    #[test]
    fn test_nodes_without_saved_url_are_ignored() {
        let doc = json!({"root": {"value": {"title": "Home"}}});
        let map = build_url_to_paths(&build_node_index(&doc));

        assert!(map.is_empty());
    }
}
