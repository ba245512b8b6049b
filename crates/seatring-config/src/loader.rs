//! Locating and reading layout configuration files

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::{ConfigError, Result};
use crate::layout::LayoutConfig;

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "SEATRING_CONFIG";

const CONFIG_FILE_NAME: &str = "config.toml";

/// `config.toml` inside the platform config directory
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "seatring").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Pick the config file to read; the bool is true when the path was asked for explicitly
pub fn resolve_path(explicit: Option<&Path>) -> Option<(PathBuf, bool)> {
    if let Some(path) = explicit {
        return Some((path.to_path_buf(), true));
    }
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
        return Some((PathBuf::from(path), true));
    }
    default_config_path().map(|path| (path, false))
}

/// Read and parse one config file
pub fn load_from_path(path: &Path) -> Result<LayoutConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    LayoutConfig::from_toml_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the active configuration.
///
/// A missing file is an error only when it was requested explicitly (argument
/// or environment); otherwise the defaults are returned.
pub fn load(explicit: Option<&Path>) -> Result<LayoutConfig> {
    match resolve_path(explicit) {
        Some((path, true)) => {
            tracing::debug!(path = %path.display(), "loading layout config");
            load_from_path(&path)
        }
        Some((path, false)) if path.exists() => {
            tracing::debug!(path = %path.display(), "loading layout config");
            load_from_path(&path)
        }
        _ => {
            tracing::debug!("no layout config found, using defaults");
            Ok(LayoutConfig::default())
        }
    }
}
