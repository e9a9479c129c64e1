//! # Warehouse Ports
//!
//! The narrow capability interface the facade consumes. The concrete backend
//! is an already-constructed dependency injected at facade construction; the
//! core never implements network or file access itself.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One catalog entry returned by a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModListing {
    /// Warehouse-assigned mod identifier.
    pub mod_id: String,
    /// Display title.
    pub title: String,
    /// Author attribution.
    pub author: String,
    /// Latest published version.
    pub version: String,
    /// Download count, for ranking display.
    pub downloads: u64,
}

/// Receipt for a staged download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadTicket {
    /// The mod being downloaded.
    pub mod_id: String,
    /// Where the archive will land once complete.
    pub destination: String,
    /// Archive size in bytes, if the backend knows it up front.
    pub size_bytes: Option<u64>,
}

/// Errors surfaced by a warehouse backend.
#[derive(Debug, Clone, Error)]
pub enum WarehouseError {
    /// The requested mod id does not exist in the catalog.
    #[error("Mod not found: {0}")]
    NotFound(String),

    /// The backend could not be reached.
    #[error("Warehouse unavailable: {0}")]
    Unavailable(String),

    /// The backend rejected the request.
    #[error("Warehouse rejected request: {0}")]
    Rejected(String),
}

/// Capability interface for the mod warehouse backend.
#[async_trait]
pub trait ModWarehouse: Send + Sync {
    /// Search the catalog. `page` is zero-based.
    async fn search(&self, query: &str, page: u32) -> Result<Vec<ModListing>, WarehouseError>;

    /// Stage a download for `mod_id` and return its ticket.
    ///
    /// Downloads are inherently non-idempotent; repeating the request may
    /// produce a fresh ticket.
    async fn download(&self, mod_id: &str) -> Result<DownloadTicket, WarehouseError>;
}
