//! # Host Configuration
//!
//! Runtime parameters for the host process, environment-driven with sane
//! defaults. Startup validation failures are fatal; nothing else here is.

use std::env;
use std::path::PathBuf;

/// Complete host configuration.
#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Path to the JSON settings file backing the config store.
    pub settings_path: PathBuf,
    /// Warehouse catalog file (local mirror of the online catalog).
    pub catalog_path: PathBuf,
    /// Directory staged downloads land in.
    pub staging_dir: PathBuf,
    /// Directory the plugin loader scans (reserved for a binary loader).
    pub plugin_dir: PathBuf,
    /// External modding tool binary.
    pub tool_binary: PathBuf,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            settings_path: PathBuf::from("modforge-settings.json"),
            catalog_path: PathBuf::from("warehouse-catalog.json"),
            staging_dir: PathBuf::from("staging"),
            plugin_dir: PathBuf::from("plugins"),
            tool_binary: PathBuf::from("modtool"),
        }
    }
}

impl HostConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `MF_SETTINGS_PATH`: settings file (default: modforge-settings.json)
    /// - `MF_CATALOG_PATH`: warehouse catalog file (default: warehouse-catalog.json)
    /// - `MF_STAGING_DIR`: download staging directory (default: staging)
    /// - `MF_PLUGIN_DIR`: plugin directory (default: plugins)
    /// - `MF_TOOL_BINARY`: modding tool binary (default: modtool)
    #[must_use]
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            settings_path: env_path("MF_SETTINGS_PATH", default.settings_path),
            catalog_path: env_path("MF_CATALOG_PATH", default.catalog_path),
            staging_dir: env_path("MF_STAGING_DIR", default.staging_dir),
            plugin_dir: env_path("MF_PLUGIN_DIR", default.plugin_dir),
            tool_binary: env_path("MF_TOOL_BINARY", default.tool_binary),
        }
    }
}

fn env_path(key: &str, default: PathBuf) -> PathBuf {
    env::var_os(key).map_or(default, PathBuf::from)
}
