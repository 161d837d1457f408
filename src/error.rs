//! Error types for `arc-sidebar`

use thiserror::Error;

/// The error type for `arc-sidebar` operations.
///
/// Only the explicit-path APIs surface errors; the default-path loader
/// degrades to an empty result instead (the sidebar file is owned by the
/// browser and may be absent or mid-rewrite at any time).
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The sidebar file is not valid JSON.
    #[error("invalid sidebar JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The per-user home directory could not be resolved.
    #[error("home directory could not be resolved")]
    HomeDirUnavailable,
}

/// Convenience alias for `arc-sidebar` results.
pub type Result<T> = std::result::Result<T, Error>;
