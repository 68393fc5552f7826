//! Errors raised while building the verb index.
//!
//! Every variant is fatal: the run stops at the first one and nothing is
//! committed. An empty corpus is not an error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    /// A record file is not a single lemma mapped to a list of forms.
    #[error("Malformed record {}: {reason}", path.display())]
    MalformedRecord { path: PathBuf, reason: String },

    #[error("Failed to read {}: {source}", path.display())]
    ReadRecord {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to discover records under {}: {source}", path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Existing index storage could not be replaced by an empty index.
    #[error("Cannot recreate index storage at {}: {reason}", path.display())]
    StorageConflict { path: PathBuf, reason: String },

    #[error("Index error: {0}")]
    Index(#[from] tantivy::TantivyError),
}

pub type BuildResult<T> = Result<T, BuildError>;
