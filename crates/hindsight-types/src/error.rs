//! Configuration errors shared across crates.

use thiserror::Error;

/// Errors from configuration loading and store-root validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file parse error at {path}: {message}")]
    Parse { path: String, message: String },

    #[error("No store root configured and no platform default available")]
    MissingStoreRoot,

    #[error("Invalid store root: {message}")]
    InvalidStoreRoot { message: String },
}
