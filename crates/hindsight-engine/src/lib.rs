//! Conversation reconstruction engine and workspace extraction.
//!
//! Composer sessions are stored in two forms: a fully materialized message
//! list, or an ordered list of lightweight headers whose message bodies live
//! as separate records in the shared store. The engine detects which form is
//! present, bulk-fetches missing bodies, merges them back in header order,
//! and fills per-message placeholders on any failure.

pub mod error;
pub mod extract;
pub mod keys;
pub mod reconstruct;
pub mod tabs;

pub use error::ExtractError;
pub use extract::Extractor;
pub use reconstruct::reconstruct;
pub use tabs::{chat_tab, session_to_tab};
