use std::io;
use thiserror::Error;

/// Easy alias for error handling
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can happen while touching session storage
#[derive(Debug, Error)]
pub enum Error {
    /// We had a problem reading or writing the storage file, for example with
    /// permissions.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The storage file wasn't the JSON we wrote there.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
