//! Configuration for seatring layouts.
//!
//! Layouts are read from a TOML file. Lookup order: an explicit path, then the
//! `SEATRING_CONFIG` environment variable, then `config.toml` in the platform
//! config directory. When none exists the stock layout is used.

pub mod error;
pub mod layout;
pub mod loader;

pub use error::{ConfigError, Result};
pub use layout::{LayoutConfig, TableOverride};
pub use loader::{default_config_path, load, load_from_path, resolve_path, CONFIG_ENV_VAR};
