//! Error types for loading configuration and walking directories.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LsTreeError>;

#[derive(Debug, Error)]
pub enum LsTreeError {
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("cannot determine the current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
    #[error("walk error: {0}")]
    Walk(#[from] jwalk::Error),
    #[error("I/O error on {path}: {source}")]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("'{0}' is not a directory")]
    NotADirectory(PathBuf),
}

impl LsTreeError {
    pub(crate) fn metadata(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LsTreeError::Metadata {
            path: path.into(),
            source,
        }
    }
}
