//! Sidebar file loading
//!
//!

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Location of the sidebar file relative to the user's home directory.
pub const SIDEBAR_RELATIVE_PATH: &str = "Library/Application Support/Arc/StorableSidebar.json";

/// The per-user path Arc writes its sidebar state to.
///
/// `None` when the home directory cannot be resolved.
pub fn default_sidebar_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(SIDEBAR_RELATIVE_PATH))
}

/// Read a sidebar file from disk and decode it as JSON.
///
/// The decoded value is returned untyped; its shape is validated downstream
/// by the node indexer.
///
/// # Errors
/// Returns an error if the file cannot be read or has invalid JSON.
pub fn read_sidebar<P: AsRef<Path>>(path: P) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    let doc: Value = serde_json::from_str(&content)?;
    Ok(doc)
}

/// Best-effort load of the sidebar file from its default path.
///
/// Any failure (unresolvable home directory, missing file, unreadable
/// file, malformed JSON) yields `None`. The browser owns this file and may
/// delete or rewrite it at any moment, so "empty on failure" is the
/// contract here, not an error.
pub fn load_default() -> Option<Value> {
    let path = default_sidebar_path()?;
    match read_sidebar(&path) {
        Ok(doc) => Some(doc),
        Err(e) => {
            tracing::debug!("sidebar file not loaded from {}: {e}", path.display());
            None
        }
    }
}
