//! The RecordStore capability: keyed lookups against a named table.

use crate::error::StoreError;
use async_trait::async_trait;

/// Key-value table in a workspace store.
pub const ITEM_TABLE: &str = "ItemTable";

/// Key-value table in the shared/global store.
pub const DISK_KV_TABLE: &str = "cursorDiskKV";

/// A read-only keyed lookup capability over a state store.
///
/// Implementations are side-effect-free from the caller's point of view.
/// `get_many` returns only the values that exist, in arbitrary store order;
/// callers that need key alignment must re-key by ids embedded in the
/// payloads themselves.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch a single value by key, or `None` if the key is absent.
    async fn get(&self, table: &str, key: &str) -> Result<Option<String>, StoreError>;

    /// Fetch the values for all present keys in one batched lookup.
    async fn get_many(&self, table: &str, keys: &[String]) -> Result<Vec<String>, StoreError>;
}
