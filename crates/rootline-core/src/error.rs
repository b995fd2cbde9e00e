//! Error types for dependency analysis
//!
//! Only [`AnalyzerError::WorkspaceUnavailable`] stops a scan. Unreadable files
//! and malformed manifests are logged by the analyzer and degrade to "no
//! dependencies" for the file in question; unresolved references are not
//! errors at all.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The workspace root is missing or is not a directory.
    #[error("workspace not available: {}", path.display())]
    WorkspaceUnavailable { path: PathBuf },

    #[error("cannot read {}: {source}", path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed manifest {}: {source}", path.display())]
    MalformedManifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration in {}: {source}", path.display())]
    InvalidConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid exclusion pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("{} is not part of the scanned project", path.display())]
    FileNotInCatalog { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
