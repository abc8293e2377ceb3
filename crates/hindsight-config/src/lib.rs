//! Store-root resolution for Hindsight.
//!
//! Resolves the directory that holds the editor's per-workspace state stores,
//! with precedence: CLI flag > env var > config file > platform default. The
//! resolved value is passed explicitly to the locator; nothing downstream
//! reads the environment.

use hindsight_types::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding the store root.
pub const STORE_ROOT_ENV: &str = "HINDSIGHT_STORE_ROOT";

/// Environment variable overriding the config directory (mainly for tests).
pub const CONFIG_DIR_ENV: &str = "HINDSIGHT_CONFIG_DIR";

/// Resolved configuration for an extraction run.
#[derive(Debug, Clone)]
pub struct HindsightConfig {
    pub store_root: PathBuf,
}

/// Settings that can be read from the TOML config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsFile {
    pub store_root: Option<PathBuf>,
}

/// CLI overrides that take highest precedence.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub store_root: Option<PathBuf>,
}

impl HindsightConfig {
    /// Load configuration from all sources, applying precedence rules.
    ///
    /// Precedence (highest to lowest):
    /// 1. CLI flags
    /// 2. `HINDSIGHT_STORE_ROOT`
    /// 3. Config file (~/.hindsight/config.toml)
    /// 4. Platform default (the editor's own workspaceStorage directory)
    pub fn load(overrides: CliOverrides) -> Result<Self, ConfigError> {
        let settings = load_settings_file(&config_file_path());
        let env_root = std::env::var_os(STORE_ROOT_ENV).map(PathBuf::from);
        let store_root =
            resolve_store_root(overrides.store_root, env_root, settings.store_root)?;
        Ok(Self { store_root })
    }
}

fn resolve_store_root(
    cli: Option<PathBuf>,
    env: Option<PathBuf>,
    file: Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    cli.or(env)
        .or(file)
        .or_else(default_store_root)
        .ok_or(ConfigError::MissingStoreRoot)
}

/// Path of the Hindsight config file (~/.hindsight/config.toml).
pub fn config_file_path() -> PathBuf {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return PathBuf::from(dir).join("config.toml");
    }
    dirs_next::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".hindsight")
        .join("config.toml")
}

/// The editor's default workspace-storage location for the current platform.
fn default_store_root() -> Option<PathBuf> {
    dirs_next::config_dir().map(|dir| dir.join("Cursor").join("User").join("workspaceStorage"))
}

/// Load and parse the TOML settings file, returning defaults on any error.
fn load_settings_file(path: &std::path::Path) -> SettingsFile {
    match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("Failed to parse {}: {}", path.display(), e);
            SettingsFile::default()
        }),
        Err(_) => SettingsFile::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_have_no_store_root() {
        let settings = SettingsFile::default();
        assert!(settings.store_root.is_none());
    }

    #[test]
    fn settings_toml_parse() {
        let toml_str = r#"store_root = "/data/workspaceStorage""#;
        let settings: SettingsFile = toml::from_str(toml_str).unwrap();
        assert_eq!(
            settings.store_root,
            Some(PathBuf::from("/data/workspaceStorage"))
        );
    }

    // Precedence is tested on resolve_store_root directly; load() reads the
    // real environment and home directory, which tests must not depend on.

    #[test]
    fn cli_override_beats_env_and_file() {
        let resolved = resolve_store_root(
            Some(PathBuf::from("/from/cli")),
            Some(PathBuf::from("/from/env")),
            Some(PathBuf::from("/from/file")),
        )
        .unwrap();
        assert_eq!(resolved, PathBuf::from("/from/cli"));
    }

    #[test]
    fn env_beats_file() {
        let resolved = resolve_store_root(
            None,
            Some(PathBuf::from("/from/env")),
            Some(PathBuf::from("/from/file")),
        )
        .unwrap();
        assert_eq!(resolved, PathBuf::from("/from/env"));
    }

    #[test]
    fn file_used_when_nothing_else_set() {
        let resolved =
            resolve_store_root(None, None, Some(PathBuf::from("/from/file"))).unwrap();
        assert_eq!(resolved, PathBuf::from("/from/file"));
    }
}
