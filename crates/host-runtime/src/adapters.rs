//! # Port Adapters
//!
//! Concrete implementations of the facade ports, backed by the local
//! filesystem and OS process spawning. These are the "already-constructed
//! dependencies" handed to facades at composition time; facades never know
//! which implementation they got.

use async_trait::async_trait;
use mf_01_warehouse::{DownloadTicket, ModListing, ModWarehouse, WarehouseError};
use mf_05_toolchain::{ConfigStore, ProcessOutput, ProcessRunner, ToolchainError};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Listings per search page.
const PAGE_SIZE: usize = 20;

// =============================================================================
// Config store
// =============================================================================

/// Key-value config persisted as a flat JSON object.
///
/// Reads are served from memory; writes go through to disk best-effort. A
/// missing or unreadable settings file starts empty rather than failing the
/// host.
pub struct JsonFileConfigStore {
    path: PathBuf,
    values: RwLock<HashMap<String, String>>,
}

impl JsonFileConfigStore {
    /// Load (or lazily create) the settings file at `path`.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = std::fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self {
            path,
            values: RwLock::new(values),
        }
    }

    fn persist(&self) {
        let snapshot = self.values.read().clone();
        match serde_json::to_string_pretty(&snapshot) {
            Ok(raw) => {
                if let Err(e) = std::fs::write(&self.path, raw) {
                    warn!(path = %self.path.display(), error = %e, "[Config] Write failed");
                }
            }
            Err(e) => warn!(error = %e, "[Config] Encode failed"),
        }
    }
}

impl ConfigStore for JsonFileConfigStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .write()
            .insert(key.to_string(), value.to_string());
        self.persist();
    }
}

// =============================================================================
// Warehouse backend
// =============================================================================

/// Warehouse backed by a local catalog file (a mirrored snapshot of the
/// online catalog). The real HTTP backend drops in behind the same port.
pub struct LocalCatalogWarehouse {
    catalog_path: PathBuf,
    staging_dir: PathBuf,
}

impl LocalCatalogWarehouse {
    /// Create a backend over `catalog_path`, staging downloads in
    /// `staging_dir`.
    #[must_use]
    pub fn new(catalog_path: impl Into<PathBuf>, staging_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            staging_dir: staging_dir.into(),
        }
    }

    async fn load_catalog(&self) -> Result<Vec<ModListing>, WarehouseError> {
        let raw = tokio::fs::read_to_string(&self.catalog_path)
            .await
            .map_err(|e| WarehouseError::Unavailable(format!("catalog unreadable: {e}")))?;
        serde_json::from_str(&raw)
            .map_err(|e| WarehouseError::Unavailable(format!("catalog malformed: {e}")))
    }
}

#[async_trait]
impl ModWarehouse for LocalCatalogWarehouse {
    async fn search(&self, query: &str, page: u32) -> Result<Vec<ModListing>, WarehouseError> {
        let needle = query.to_lowercase();
        let matches: Vec<ModListing> = self
            .load_catalog()
            .await?
            .into_iter()
            .filter(|listing| listing.title.to_lowercase().contains(&needle))
            .collect();

        debug!(query = %query, hits = matches.len(), "[Warehouse] Catalog searched");
        Ok(matches
            .into_iter()
            .skip(page as usize * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect())
    }

    async fn download(&self, mod_id: &str) -> Result<DownloadTicket, WarehouseError> {
        let listing = self
            .load_catalog()
            .await?
            .into_iter()
            .find(|listing| listing.mod_id == mod_id)
            .ok_or_else(|| WarehouseError::NotFound(mod_id.to_string()))?;

        Ok(DownloadTicket {
            mod_id: listing.mod_id,
            destination: self
                .staging_dir
                .join(format!("{mod_id}.zip"))
                .display()
                .to_string(),
            size_bytes: None,
        })
    }
}

// =============================================================================
// Process runner
// =============================================================================

/// Launches the external modding tool via the OS.
///
/// The pinned version travels in the `MODTOOL_VERSION` environment variable;
/// the tool's own launcher resolves it to an installed build.
pub struct TokioProcessRunner {
    binary: PathBuf,
}

impl TokioProcessRunner {
    /// Create a runner for the tool at `binary`.
    #[must_use]
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// The configured binary path.
    #[must_use]
    pub fn binary(&self) -> &Path {
        &self.binary
    }
}

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn run(&self, version: &str, args: &[String]) -> Result<ProcessOutput, ToolchainError> {
        let output = tokio::process::Command::new(&self.binary)
            .args(args)
            .env("MODTOOL_VERSION", version)
            .output()
            .await
            .map_err(|e| ToolchainError::LaunchFailed(e.to_string()))?;

        Ok(ProcessOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}
