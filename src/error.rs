//! Error taxonomy for the renaming pipeline

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenameError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: port declaration has no '=' delimiter")]
    Format { path: PathBuf, line: usize },

    #[error("{path} is not valid UTF-8")]
    Encoding { path: PathBuf },

    #[error("rename target {path} already exists, refusing to overwrite")]
    RenameCollision { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, RenameError>;
