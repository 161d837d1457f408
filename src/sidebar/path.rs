//! Folder path reconstruction
//!
//!

use super::index::NodeIndex;

/// Hard bound on the parent-chain walk. The sidebar file is externally
/// owned, so a cyclic or pathologically deep chain truncates silently
/// instead of hanging.
pub const MAX_ANCESTOR_HOPS: usize = 200;

/// Walk the parent-id chain upward from `id`, collecting titles, and return
/// them root-first joined with `/`.
///
/// A node without a title contributes no segment but its ancestry is still
/// followed. An id missing from the index yields `""`.
pub fn build_path_by_id(index: &NodeIndex, id: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    let mut current = id;
    let mut hops = 0;

    while !current.is_empty() && hops < MAX_ANCESTOR_HOPS {
        hops += 1;

        let Some(node) = index.get(current) else {
            break;
        };

        if let Some(title) = node.title.as_deref() {
            parts.push(title);
        }

        match node.parent_id.as_deref() {
            Some(parent) => current = parent,
            None => break, // reached a root
        }
    }

    parts.reverse();
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sidebar::node::SidebarNode;
    use serde_json::json;

    fn index_from(pairs: &[(&str, serde_json::Value)]) -> NodeIndex {
        pairs
            .iter()
            .map(|(id, v)| ((*id).to_owned(), SidebarNode::from_value(v).unwrap()))
            .collect()
    }

    #[test]
    fn test_three_level_path() {
        let index = index_from(&[
            ("root", json!({"title": "Home"})),
            ("n1", json!({"title": "Work", "parentID": "root"})),
            ("n2", json!({"title": "Proj", "parentID": "n1"})),
        ]);

        assert_eq!(build_path_by_id(&index, "n2"), "Home/Work/Proj");
        assert_eq!(build_path_by_id(&index, "n1"), "Home/Work");
        assert_eq!(build_path_by_id(&index, "root"), "Home");
    }

    #[test]
    fn test_missing_id_yields_empty_path() {
        let index = index_from(&[("root", json!({"title": "Home"}))]);
        assert_eq!(build_path_by_id(&index, "nope"), "");
    }

    #[test]
    fn test_untitled_ancestor_is_skipped_but_followed() {
        let index = index_from(&[
            ("root", json!({"title": "Home"})),
            ("mid", json!({"title": null, "parentID": "root"})),
            ("leaf", json!({"title": "Leaf", "parentID": "mid"})),
        ]);

        assert_eq!(build_path_by_id(&index, "leaf"), "Home/Leaf");
    }

    #[test]
    fn test_dangling_parent_truncates_path() {
        let index = index_from(&[("n1", json!({"title": "Orphan", "parentID": "gone"}))]);
        assert_eq!(build_path_by_id(&index, "n1"), "Orphan");
    }

    #[test]
    fn test_self_cycle_is_bounded() {
        let index = index_from(&[("loop", json!({"title": "L", "parentID": "loop"}))]);

        let path = build_path_by_id(&index, "loop");
        assert_eq!(path.split('/').count(), MAX_ANCESTOR_HOPS);
    }
}
