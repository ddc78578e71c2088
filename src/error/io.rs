use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("failed to read file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to scan directory '{path}': {source}")]
    DirectoryScanError {
        path: PathBuf,
        source: walkdir::Error,
    },
}

impl IoError {
    pub fn directory_not_found(path: impl Into<PathBuf>) -> Self {
        Self::DirectoryNotFound { path: path.into() }
    }

    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn directory_scan_error(path: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        Self::DirectoryScanError {
            path: path.into(),
            source,
        }
    }
}
