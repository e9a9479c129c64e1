//! # Warehouse Facade (mf-01)
//!
//! Built-in handler for the mod warehouse feature module.
//!
//! ## Message Types
//!
//! | Type | Payload | Result |
//! |------|---------|--------|
//! | `WAREHOUSE_SEARCH` | `{ "query": "...", "page": 0 }` | matching listings |
//! | `WAREHOUSE_DOWNLOAD` | `{ "mod_id": "..." }` | download ticket |
//!
//! The facade owns no warehouse logic itself; it translates envelopes to
//! calls on the [`ModWarehouse`] port and translates results back. The
//! backend (HTTP client, local mirror, fixture) is injected at construction.

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod handler;
pub mod ports;

pub use handler::WarehouseFacade;
pub use ports::{DownloadTicket, ModListing, ModWarehouse, WarehouseError};

/// Search the warehouse catalog.
pub const MSG_WAREHOUSE_SEARCH: &str = "WAREHOUSE_SEARCH";
/// Stage a mod download.
pub const MSG_WAREHOUSE_DOWNLOAD: &str = "WAREHOUSE_DOWNLOAD";
