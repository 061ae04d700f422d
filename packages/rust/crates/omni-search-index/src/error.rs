//! Error types for index generation.
//!
//! Follows ODF-REP: Library crates use `thiserror` for explicit error enums.
//! The pipeline stages themselves are total; only loading inputs and writing the
//! artifact can fail.

use std::path::PathBuf;

use thiserror::Error;

/// Error types for loading catalogs/config and writing the index.
#[derive(Error, Debug)]
pub enum SearchIndexError {
    /// File could not be read or written.
    #[error("IO error at {path}: {source}")]
    Io {
        /// File involved in the failed operation.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Catalog or record file is not valid JSON, or the index failed to serialize.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file is not valid YAML.
    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),
}

impl SearchIndexError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for index operations.
pub type Result<T> = std::result::Result<T, SearchIndexError>;
