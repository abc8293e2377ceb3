//! Store-specific error types.

use thiserror::Error;

/// Errors that can occur while reading a state store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to open store at {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Store query failed: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store worker task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
