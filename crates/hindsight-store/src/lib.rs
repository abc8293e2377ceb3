//! Read-only access to the editor's SQLite key-value state stores.

pub mod error;
pub mod locator;
pub mod record;
pub mod sqlite;

pub use error::StoreError;
pub use locator::{STATE_DB_FILE, StoreLocator, StorePaths};
pub use record::{DISK_KV_TABLE, ITEM_TABLE, RecordStore};
pub use sqlite::SqliteStore;
