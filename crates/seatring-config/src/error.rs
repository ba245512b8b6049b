//! Error types for configuration loading.

use std::path::PathBuf;

use seatring_layout::LayoutTableError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid {name} anchor: ({left}, {top}) is off the table")]
    InvalidAnchor {
        name: &'static str,
        left: f32,
        top: f32,
    },

    #[error("Invalid layout table: {0}")]
    Table(#[from] LayoutTableError),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
