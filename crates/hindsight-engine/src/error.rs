//! Extraction error types.

use hindsight_store::StoreError;
use thiserror::Error;

/// Errors from extracting a workspace's history.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Neither chat data nor a composer index exists for the workspace.
    /// Distinct from an empty success: there is nothing to reconstruct.
    #[error("No chat or composer data found for workspace {workspace_id}")]
    NotFound { workspace_id: String },

    /// A well-known workspace record exists but is not valid JSON of the
    /// expected shape.
    #[error("Malformed {key} record: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}
