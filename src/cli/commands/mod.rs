//! Subcommand definitions and dispatch

use clap::Subcommand;
use std::path::{Path, PathBuf};

pub mod lookup;
pub mod nodes;
pub mod paths;

use crate::error::Error;
use crate::sidebar::{self, UrlPathMap};

#[derive(Subcommand)]
pub enum Commands {
    /// Print the full URL -> folder-paths table
    Paths {
        /// Sidebar file to read (defaults to Arc's per-user path)
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Emit the table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the folder path(s) a URL is saved under
    Lookup {
        /// The URL to look up (fragment is stripped before matching)
        url: String,

        /// Sidebar file to read (defaults to Arc's per-user path)
        #[arg(short, long)]
        source: Option<PathBuf>,
    },

    /// List every indexed sidebar node (id, title, parent, saved URL)
    Nodes {
        /// Sidebar file to read (defaults to Arc's per-user path)
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Emit the node index as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying operation fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Paths { source, json } => paths::execute(source.as_deref(), *json),
            Commands::Lookup { url, source } => lookup::execute(url, source.as_deref()),
            Commands::Nodes { source, json } => nodes::execute(source.as_deref(), *json),
        }
    }
}

/// Resolve the sidebar file to operate on: explicit `--source`, or Arc's
/// default per-user path.
pub(crate) fn resolve_source(source: Option<&Path>) -> anyhow::Result<PathBuf> {
    match source {
        Some(path) => Ok(path.to_path_buf()),
        None => sidebar::default_sidebar_path().ok_or_else(|| Error::HomeDirUnavailable.into()),
    }
}

/// Load the URL -> paths map from the resolved source.
pub(crate) fn load_map(source: Option<&Path>) -> anyhow::Result<UrlPathMap> {
    let path = resolve_source(source)?;
    Ok(sidebar::url_to_paths_from(path)?)
}
