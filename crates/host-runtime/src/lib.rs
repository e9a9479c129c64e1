//! # Modforge Host Runtime
//!
//! The main entry point for the Modforge host process.
//!
//! ## Architecture
//!
//! Feature modules (facades) and third-party plugins are addressed through
//! one typed message-passing interface. The runtime owns:
//!
//! - `config` - environment-driven host configuration
//! - `adapters` - filesystem/process implementations of the facade ports
//! - `wiring` - composition: facades + plugin lifecycle + routing table
//!
//! ## Startup Sequence
//!
//! 1. Initialize telemetry
//! 2. Load configuration from the environment
//! 3. Discover and initialize all plugins (sequential, before any dispatch)
//! 4. Freeze the routing table (collisions are fatal here, never later)
//! 5. Serve dispatches until shutdown
//! 6. Shut all plugins down best-effort, reverse discovery order

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod adapters;
pub mod config;
pub mod wiring;

pub use config::HostConfig;
pub use wiring::build_runtime;

use plugin_host::PluginHost;
use shared_dispatch::MessageRouter;
use shared_types::{MessageRequest, MessageResponse, PluginState};

/// The composed host: frozen routing table plus plugin lifecycle owner.
pub struct HostRuntime {
    router: MessageRouter,
    plugins: PluginHost,
}

impl HostRuntime {
    /// Assemble from an already-wired router and plugin host.
    #[must_use]
    pub fn new(router: MessageRouter, plugins: PluginHost) -> Self {
        Self { router, plugins }
    }

    /// The sole inbound entry point for the UI/automation layer.
    pub async fn dispatch(&self, request: MessageRequest) -> MessageResponse {
        self.router.dispatch(request).await
    }

    /// Number of registered message types.
    #[must_use]
    pub fn route_count(&self) -> usize {
        self.router.route_count()
    }

    /// Lifecycle state of a discovered plugin.
    #[must_use]
    pub fn plugin_state(&self, plugin_id: &str) -> Option<PluginState> {
        self.plugins.state(plugin_id)
    }

    /// Tear down all plugins, best-effort. The routing table stays frozen;
    /// the process is expected to exit after this.
    pub async fn shutdown(&mut self) {
        self.plugins.shutdown_all().await;
    }
}
