//! Top-level workspace extraction.

use crate::error::ExtractError;
use crate::keys::{CHAT_DATA_KEY, COMPOSER_INDEX_KEY};
use crate::reconstruct::reconstruct;
use crate::tabs::chat_tab;
use hindsight_store::{ITEM_TABLE, RecordStore, SqliteStore, StoreLocator};
use hindsight_types::{ChatData, ComposerCollection, ComposerIndex, WorkspaceData};

/// Extracts a workspace's chat and composer history out of its state stores.
pub struct Extractor {
    locator: StoreLocator,
}

impl Extractor {
    pub fn new(locator: StoreLocator) -> Self {
        Self { locator }
    }

    /// Extract everything for one workspace.
    ///
    /// Returns `ExtractError::NotFound` when neither the chat record nor the
    /// composer index exists; that is a distinct condition, not an empty
    /// success. The shared store is opened once and held until every nested
    /// body fetch has completed.
    pub async fn extract(&self, workspace_id: &str) -> Result<WorkspaceData, ExtractError> {
        let paths = self.locator.locate(workspace_id);
        let workspace = SqliteStore::open(&paths.workspace_store).await?;

        let chat_raw = workspace.get(ITEM_TABLE, CHAT_DATA_KEY).await?;
        let composer_raw = workspace.get(ITEM_TABLE, COMPOSER_INDEX_KEY).await?;

        if chat_raw.is_none() && composer_raw.is_none() {
            return Err(ExtractError::NotFound {
                workspace_id: workspace_id.to_string(),
            });
        }

        let mut data = WorkspaceData {
            tabs: Vec::new(),
            composers: None,
        };

        if let Some(raw) = chat_raw {
            let chat: ChatData = parse_record(CHAT_DATA_KEY, &raw)?;
            data.tabs = chat.tabs.into_iter().map(chat_tab).collect();
        }

        if let Some(raw) = composer_raw {
            let index: ComposerIndex = parse_record(COMPOSER_INDEX_KEY, &raw)?;
            let shared = SqliteStore::open(&paths.shared_store).await?;
            let all_composers = reconstruct(&index, &shared).await?;
            data.composers = Some(ComposerCollection { all_composers });
            // `shared` drops here, after all nested body fetches are done.
        }

        Ok(data)
    }
}

fn parse_record<T: serde::de::DeserializeOwned>(key: &str, raw: &str) -> Result<T, ExtractError> {
    serde_json::from_str(raw).map_err(|source| ExtractError::Malformed {
        key: key.to_string(),
        source,
    })
}
