use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Where a mapped domain resolves to. An entry carries exactly one
/// destination kind; remapping replaces the whole value, so switching a
/// domain from a port to a folder can never leave both behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// A `host:port` destination reached over the network.
    Host(String),

    /// An absolute folder whose contents are served for this domain.
    Folder(PathBuf),
}

#[derive(Debug, Error)]
pub enum DestinationError {
    #[error("Folder does not exist: {0}")]
    FolderNotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
}

impl Destination {
    /// Folder destination. Resolves the path to an absolute one here, at
    /// the edge; the editor and the store trust paths they are handed.
    pub fn folder(path: PathBuf) -> Result<Self, DestinationError> {
        if !path.exists() {
            return Err(DestinationError::FolderNotFound(path));
        }
        if !path.is_dir() {
            return Err(DestinationError::NotADirectory(path));
        }
        Ok(Self::Folder(path.canonicalize().unwrap_or(path)))
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Host(host) => write!(f, "{}", host),
            Destination::Folder(path) => write!(f, "{}", path.display()),
        }
    }
}
