//! Shared data model and error hierarchy for Hindsight.

pub mod error;
pub mod record;
pub mod tab;
pub mod time;

pub use error::ConfigError;
pub use record::*;
pub use tab::*;
pub use time::normalize_timestamp;
