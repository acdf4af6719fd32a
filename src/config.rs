use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::version::registries::npm::DEFAULT_BASE_URL;

// =============================================================================
// Package and manifest constants
// =============================================================================

/// Script API package whose published versions drive the catalog
pub const API_PACKAGE: &str = "@minecraft/server";

/// Companion data package pinned to the game release version
pub const DATA_PACKAGE: &str = "@minecraft/vanilla-data";

/// Additional script modules every behavior pack declares
pub const COMPANION_MODULES: [&str; 2] = ["@minecraft/server-net", "@minecraft/server-admin"];

/// Version declared for the companion script modules
pub const COMPANION_MODULE_VERSION: &str = "1.0.0-beta";

/// Manifest schema version written by `init`
pub const MANIFEST_FORMAT_VERSION: u32 = 2;

/// Default plugin version offered by `init`
pub const DEFAULT_PLUGIN_VERSION: &str = "0.1.0";

/// Optional per-project configuration file
pub const CONFIG_FILE_NAME: &str = "stdhub.json";

/// Environment variable holding the log filter directive
pub const LOG_ENV_VAR: &str = "STDHUB_LOG";

/// Tool configuration, read from `stdhub.json` in the project directory
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ToolConfig {
    /// Base URL of the npm registry
    pub registry_url: String,
    /// Package whose stable builds form the catalog
    pub api_package: String,
    /// Package pinned to the release (game) version
    pub data_package: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            registry_url: DEFAULT_BASE_URL.to_string(),
            api_package: API_PACKAGE.to_string(),
            data_package: DATA_PACKAGE.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid configuration in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl ToolConfig {
    /// Load `stdhub.json` from `project_dir`, falling back to defaults when absent
    pub fn load(project_dir: &Path) -> Result<Self, ConfigError> {
        let path = project_dir.join(CONFIG_FILE_NAME);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }
}

/// Returns the path to the data directory for stdhub-cli.
/// Uses $XDG_DATA_HOME/stdhub-cli if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/stdhub-cli,
/// or ./stdhub-cli if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("stdhub-cli.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("stdhub-cli")
}
