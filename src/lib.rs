//! # arc-sidebar
//!
//! A pure-Rust reader for Arc browser's `StorableSidebar.json`.
//!
//! Arc persists its sidebar (pinned tabs, folders, spaces) as one JSON file
//! whose schema shifts between versions: collections appear either as plain
//! objects or as flattened `[id, record, id, record, ...]` arrays, nested at
//! arbitrary depth. This crate scans the whole document tolerantly, indexes
//! everything that looks like a sidebar node, and answers one question:
//! *under which folder path(s) is each saved URL filed?*
//!
//! ## Quick Start
//!
//! ```no_run
//! use arc_sidebar::prelude::*;
//!
//! // Best effort against the default per-user path; empty map if the
//! // sidebar file is missing or unreadable.
//! let map = url_to_paths_map();
//! for (url, paths) in &map {
//!     println!("{url} -> {}", paths.join(", "));
//! }
//!
//! // Or against an explicit file, with errors surfaced:
//! let map = url_to_paths_from("StorableSidebar.json")?;
//! # Ok::<(), arc_sidebar::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `arc-sidebar` command-line binary

pub mod error;
pub mod sidebar;

// Re-exports for convenience
pub use error::{Error, Result};
pub use sidebar::{normalize_url, url_to_paths_from, url_to_paths_map};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::sidebar::{
        NodeIndex, SidebarNode, UrlPathMap, build_node_index, build_path_by_id,
        build_url_to_paths, default_sidebar_path, load_default, normalize_url, read_sidebar,
        url_to_paths_from, url_to_paths_map,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
