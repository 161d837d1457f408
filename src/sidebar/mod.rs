//! Arc sidebar parsing: load `StorableSidebar.json`, index its node
//! records, and map saved-tab URLs to their folder paths.

pub mod entries;
pub mod index;
pub mod node;
pub mod path;
pub mod reader;
pub mod url_map;

pub use index::{NodeIndex, build_node_index};
pub use node::SidebarNode;
pub use path::{MAX_ANCESTOR_HOPS, build_path_by_id};
pub use reader::{default_sidebar_path, load_default, read_sidebar};
pub use url_map::{UrlPathMap, build_url_to_paths, normalize_url};

use std::path::Path;

use crate::error::Result;

/// Map every saved-tab URL in the default sidebar file to its folder paths.
///
/// The sole best-effort entry point: load → index → map-build, rebuilt from
/// scratch on every call. A missing, unreadable, or malformed sidebar file
/// yields an empty map, never an error. The result is a snapshot; no
/// live-update contract is offered.
pub fn url_to_paths_map() -> UrlPathMap {
    match load_default() {
        Some(doc) => build_url_to_paths(&build_node_index(&doc)),
        None => UrlPathMap::new(),
    }
}

/// Explicit-path variant of [`url_to_paths_map`]; load failures propagate.
///
/// # Errors
/// Returns an error if the file cannot be read or has invalid JSON.
pub fn url_to_paths_from<P: AsRef<Path>>(path: P) -> Result<UrlPathMap> {
    let doc = read_sidebar(path)?;
    Ok(build_url_to_paths(&build_node_index(&doc)))
}
