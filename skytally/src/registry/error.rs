//! Error types for registry loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a registry file.
///
/// Malformed rows are not errors; they are skipped and counted in
/// [`LoadStats`](super::LoadStats).
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The registry file could not be opened.
    #[error("Failed to open registry file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An I/O failure occurred while reading rows.
    #[error("Failed to read registry data: {0}")]
    Read(#[from] csv::Error),
}
