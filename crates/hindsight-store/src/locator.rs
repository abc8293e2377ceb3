//! Session Locator: derives store locations for a workspace.

use crate::error::StoreError;
use hindsight_types::ConfigError;
use std::path::PathBuf;

/// File name of every state store.
pub const STATE_DB_FILE: &str = "state.vscdb";

/// Derives the two store locations for a workspace from a configured root.
#[derive(Debug, Clone)]
pub struct StoreLocator {
    store_root: PathBuf,
}

/// The two stores involved in extracting one workspace's history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    /// Workspace-local store holding chat data and the composer index.
    pub workspace_store: PathBuf,
    /// Shared/global store holding composer session and message bodies.
    pub shared_store: PathBuf,
}

impl StoreLocator {
    /// Create a locator over the given workspace-storage root.
    pub fn new(store_root: PathBuf) -> Result<Self, ConfigError> {
        if store_root.as_os_str().is_empty() {
            return Err(ConfigError::InvalidStoreRoot {
                message: "store root path is empty".into(),
            });
        }
        Ok(Self { store_root })
    }

    /// Derive both store paths for a workspace. Pure path arithmetic, no I/O.
    ///
    /// The shared store lives beside the workspace-storage root, in the
    /// editor's `globalStorage` directory.
    pub fn locate(&self, workspace_id: &str) -> StorePaths {
        StorePaths {
            workspace_store: self.store_root.join(workspace_id).join(STATE_DB_FILE),
            shared_store: self
                .store_root
                .join("..")
                .join("globalStorage")
                .join(STATE_DB_FILE),
        }
    }

    /// List workspace ids under the root: directories that contain a state
    /// store. Unreadable entries are logged and skipped.
    pub async fn list_workspaces(&self) -> Result<Vec<String>, StoreError> {
        let mut ids = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.store_root).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            match tokio::fs::try_exists(path.join(STATE_DB_FILE)).await {
                Ok(true) => {
                    if let Some(name) = entry.file_name().to_str() {
                        ids.push(name.to_string());
                    }
                }
                Ok(false) => {}
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry {}: {}", path.display(), e);
                }
            }
        }
        ids.sort();
        Ok(ids)
    }
}
