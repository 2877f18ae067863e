use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to read a file for analysis.
///
/// Every variant carries the offending path and the system's own message, so
/// the caller can show it to the user unchanged.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("File not found '{path}': {source}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Permission denied '{path}': {source}")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Not a regular file '{path}'")]
    NotRegularFile { path: PathBuf },

    #[error("Failed to read file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReadError {
    /// Classify an I/O failure by its kind.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path, source },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            io::ErrorKind::IsADirectory => Self::NotRegularFile { path },
            _ => Self::Io { path, source },
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path, .. }
            | Self::PermissionDenied { path, .. }
            | Self::NotRegularFile { path }
            | Self::Io { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReadError>;
