//! Configuration loading
//!
//! Values are resolved in priority order:
//! 1. Command-line argument or environment variable (highest priority)
//! 2. TOML config file
//! 3. Compiled default (fallback)
//!
//! The first tier is parsed by the binary and handed in as
//! [`ConfigOverrides`]; this module merges it with the lower tiers.

use crate::db::DEFAULT_BUSY_TIMEOUT_MS;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default listen host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Default database file, relative to the working directory
pub const DEFAULT_DATABASE_FILE: &str = "devotionals.db";

/// Default tracing filter when neither RUST_LOG nor the TOML file sets one
pub const DEFAULT_LOG_LEVEL: &str = "devotionals_server=info,devotionals_common=info,tower_http=info";

/// Contents of the optional TOML config file
///
/// Every key is optional; missing keys fall through to compiled defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database_path: Option<PathBuf>,
    pub busy_timeout_ms: Option<u64>,
    pub log_level: Option<String>,
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database_path: Option<PathBuf>,
    pub busy_timeout_ms: Option<u64>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub busy_timeout_ms: u64,
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_path: PathBuf::from(DEFAULT_DATABASE_FILE),
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ServiceConfig {
    /// Merge overrides, TOML values and compiled defaults
    pub fn resolve(overrides: &ConfigOverrides, file: &TomlConfig) -> Self {
        let defaults = Self::default();

        Self {
            host: overrides
                .host
                .clone()
                .or_else(|| file.host.clone())
                .unwrap_or(defaults.host),
            port: overrides.port.or(file.port).unwrap_or(defaults.port),
            database_path: overrides
                .database_path
                .clone()
                .or_else(|| file.database_path.clone())
                .unwrap_or(defaults.database_path),
            busy_timeout_ms: overrides
                .busy_timeout_ms
                .or(file.busy_timeout_ms)
                .unwrap_or(defaults.busy_timeout_ms),
            log_level: file.log_level.clone().unwrap_or(defaults.log_level),
        }
    }

    /// Socket address string the HTTP server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Platform config file location, e.g. `~/.config/devotionals/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("devotionals").join("config.toml"))
}

/// Pick the config file to read
///
/// An explicitly named file is always returned, so a missing one surfaces
/// as a read error. The platform default is used only when it exists.
pub fn locate_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => default_config_path().filter(|p| p.exists()),
    }
}

/// Read and parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;
    parse_toml_config(&content)
}

/// Parse TOML config file contents
pub fn parse_toml_config(content: &str) -> Result<TomlConfig> {
    toml::from_str(content).map_err(|e| Error::Config(format!("Invalid TOML config: {}", e)))
}
