//! Error types for the puzzle helper front end.

use std::path::PathBuf;
use thiserror::Error;

/// Failures reading the digit block or a layout file from disk.
#[derive(Debug, Error)]
pub enum SourceError {
    /// File does not exist.
    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Any other I/O failure while reading.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    pub fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path)
        } else {
            Self::Read { path, source }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
