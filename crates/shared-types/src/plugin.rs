//! # Plugin Lifecycle Contract
//!
//! Extends the handler contract with explicit initialize/shutdown phases and
//! identity metadata, for units that are dynamically discovered rather than
//! statically wired.
//!
//! ## Lifecycle
//!
//! ```text
//! Discovered ──→ Initializing ──→ Active ──→ ShuttingDown ──→ Stopped
//!                     │                           │
//!                     └─────────→ Failed ←────────┘
//! ```
//!
//! Only `Active` plugins may receive dispatched requests. A failed initialize
//! excludes the plugin from the routing table entirely; a failed shutdown is
//! logged and never retried.

use crate::context::PluginContext;
use crate::errors::PluginError;
use crate::handler::MessageHandler;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The contract for dynamically discovered handlers.
///
/// Identity accessors are read-only and must stay stable for the lifetime of
/// the loaded instance; the host uses `id` as the dedup key when the same
/// plugin is discovered twice.
#[async_trait]
pub trait Plugin: MessageHandler {
    /// Globally unique reverse-domain identifier (e.g. `com.example.themer`).
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Semantic version string.
    fn version(&self) -> &str;

    /// Brief description.
    fn description(&self) -> &str {
        ""
    }

    /// Author attribution.
    fn author(&self) -> &str {
        ""
    }

    /// Initialize the plugin with its host-constructed context.
    ///
    /// Called once, before the plugin can receive any dispatch. The plugin is
    /// expected to validate any resources it needs here; on error it is marked
    /// `Failed` and its declared message types stay unknown to the router.
    async fn initialize(&self, context: PluginContext) -> Result<(), PluginError>;

    /// Shut the plugin down.
    ///
    /// Always attempted during host teardown and on explicit unload. Must be
    /// best-effort: failures are logged by the host, not escalated.
    async fn shutdown(&self) -> Result<(), PluginError>;
}

/// A type-erased, shareable plugin reference.
pub type DynPlugin = Arc<dyn Plugin>;

/// Identity snapshot taken at discovery time; immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginDescriptor {
    /// Reverse-domain unique id.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Semantic version string.
    pub version: String,
    /// Brief description.
    pub description: String,
    /// Author attribution.
    pub author: String,
    /// Message types declared via `handled_message_types` at discovery.
    pub message_types: Vec<String>,
}

impl PluginDescriptor {
    /// Snapshot a plugin's identity and declared message types.
    #[must_use]
    pub fn from_plugin(plugin: &dyn Plugin) -> Self {
        Self {
            id: plugin.id().to_string(),
            name: plugin.name().to_string(),
            version: plugin.version().to_string(),
            description: plugin.description().to_string(),
            author: plugin.author().to_string(),
            message_types: plugin.handled_message_types(),
        }
    }
}

/// Lifecycle state of one plugin instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PluginState {
    /// Constructed by the discovery collaborator, not yet initialized.
    Discovered,
    /// Host called `initialize`, awaiting the result.
    Initializing,
    /// Initialize returned normally; eligible for dispatch.
    Active,
    /// Host called `shutdown`, awaiting the result.
    ShuttingDown,
    /// Shutdown returned normally.
    Stopped,
    /// Terminal: unrecoverable error during initialize or shutdown.
    Failed,
}

impl PluginState {
    /// Whether a plugin in this state may receive dispatched requests.
    #[must_use]
    pub fn may_receive_dispatch(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Whether this state can never be left.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Failed | Self::Stopped)
    }
}
