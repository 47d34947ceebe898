use std::path::PathBuf;

use thiserror::Error;

use recordkeep_core::DomainError;

/// Reading the inventory file failed. A missing file is not an error.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed inventory file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("inconsistent inventory file {path}: {source}")]
    Inconsistent {
        path: PathBuf,
        #[source]
        source: DomainError,
    },
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to serialize inventory: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
