//! Catalog error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading movie records.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Malformed JSON or a record of the wrong shape.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reading a movie file failed.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required display field is empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}
