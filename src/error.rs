//! Error types for index building

use std::io;
use std::path::PathBuf;

/// Everything that can abort an index run.
///
/// There is no recovery path: the first error stops the walk and is
/// reported by the binary.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("cannot access '{}': No such file or directory", .0.display())]
    RootNotFound(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("directory walk failed: {0}")]
    Walk(#[from] ignore::Error),

    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IndexError>;
