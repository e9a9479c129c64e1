//! # Plugin Host
//!
//! Owns every discovered plugin instance and drives its lifecycle:
//!
//! ```text
//! Discovered → Initializing → Active → ShuttingDown → Stopped
//!                   │                       │
//!                   └──────→ Failed ←───────┘
//! ```
//!
//! Initialize and shutdown run sequentially per plugin during the host-wide
//! startup/teardown phases, so two plugins never race on shared host
//! resources during the most fragile moments.

use async_trait::async_trait;
use shared_types::{
    DynHandler, DynPlugin, MessageHandler, MessageRequest, MessageResponse, PluginContext,
    PluginDescriptor, PluginError, PluginErrorKind, PluginState,
};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::discovery::PluginDiscovery;

/// Entry for one owned plugin instance.
struct PluginEntry {
    /// The plugin instance.
    plugin: DynPlugin,
    /// Identity snapshot taken at discovery.
    descriptor: PluginDescriptor,
    /// Current lifecycle state.
    state: PluginState,
}

/// Adapter presenting a plugin to the router as a plain handler.
///
/// From the router's point of view a plugin and a facade are the same thing;
/// this wrapper is the only place that knows otherwise.
struct PluginHandler(DynPlugin);

#[async_trait]
impl MessageHandler for PluginHandler {
    fn handled_message_types(&self) -> Vec<String> {
        self.0.handled_message_types()
    }

    async fn handle_message(&self, request: MessageRequest) -> MessageResponse {
        self.0.handle_message(request).await
    }
}

/// Central owner of all plugin instances and their lifecycle state.
///
/// The host process exclusively owns this; a plugin never outlives it and
/// holds no reference back into host internals beyond its context.
#[derive(Default)]
pub struct PluginHost {
    /// Entries in discovery order. Shutdown walks this in reverse.
    entries: Vec<PluginEntry>,
}

impl PluginHost {
    /// Create an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a discovered plugin.
    ///
    /// A duplicate id is rejected: two discovered plugins claiming the same
    /// identity is a discovery failure for the later one, never a silent
    /// replacement.
    pub fn add(&mut self, plugin: DynPlugin) -> Result<(), PluginError> {
        let descriptor = PluginDescriptor::from_plugin(plugin.as_ref());

        if self.entries.iter().any(|e| e.descriptor.id == descriptor.id) {
            return Err(PluginError::new(
                descriptor.id,
                PluginErrorKind::DuplicateId,
                "plugin id already discovered",
            ));
        }

        info!(
            plugin = %descriptor.id,
            name = %descriptor.name,
            version = %descriptor.version,
            types = descriptor.message_types.len(),
            "[PluginHost] Plugin discovered"
        );

        self.entries.push(PluginEntry {
            plugin,
            descriptor,
            state: PluginState::Discovered,
        });
        Ok(())
    }

    /// Run a discovery collaborator and take ownership of everything it finds.
    ///
    /// Returns the number of plugins added. A duplicate id fails discovery
    /// for that instance only; earlier intake stands.
    pub fn discover_from(
        &mut self,
        discovery: &dyn PluginDiscovery,
    ) -> Result<usize, PluginError> {
        let mut added = 0;
        for plugin in discovery.discover()? {
            match self.add(plugin) {
                Ok(()) => added += 1,
                Err(e) => {
                    error!(error = %e, "[PluginHost] Discovery rejected");
                    return Err(e);
                }
            }
        }
        Ok(added)
    }

    /// Initialize every discovered plugin, sequentially, in discovery order.
    ///
    /// `make_context` builds the sandboxed context for each plugin; the host
    /// decides there which services each plugin is granted. A failed
    /// initialize marks the plugin `Failed` and it is excluded from
    /// [`Self::active_handlers`]. Returns the number of plugins now `Active`.
    pub async fn initialize_all<F>(&mut self, make_context: F) -> usize
    where
        F: Fn(&PluginDescriptor) -> PluginContext,
    {
        info!(
            count = self.entries.len(),
            "[PluginHost] Initializing plugins"
        );

        let mut active = 0;
        for entry in &mut self.entries {
            if entry.state != PluginState::Discovered {
                continue;
            }

            entry.state = PluginState::Initializing;
            info!(plugin = %entry.descriptor.id, "[PluginHost] Initializing");

            let context = make_context(&entry.descriptor);
            match entry.plugin.initialize(context).await {
                Ok(()) => {
                    entry.state = PluginState::Active;
                    active += 1;
                    info!(plugin = %entry.descriptor.id, "[PluginHost] ✓ Active");
                }
                Err(e) => {
                    entry.state = PluginState::Failed;
                    error!(
                        plugin = %entry.descriptor.id,
                        error = %e,
                        "[PluginHost] ✗ Initialize failed; excluded from routing"
                    );
                }
            }
        }

        active
    }

    /// Shut down every `Active` plugin, sequentially, in reverse discovery
    /// order. Best-effort: a failure is logged, the plugin is marked
    /// `Failed`, and teardown continues with the rest.
    pub async fn shutdown_all(&mut self) {
        info!("[PluginHost] Shutting down plugins");

        for entry in self.entries.iter_mut().rev() {
            if entry.state != PluginState::Active {
                continue;
            }

            entry.state = PluginState::ShuttingDown;
            info!(plugin = %entry.descriptor.id, "[PluginHost] Shutting down");

            match entry.plugin.shutdown().await {
                Ok(()) => {
                    entry.state = PluginState::Stopped;
                    info!(plugin = %entry.descriptor.id, "[PluginHost] ✓ Stopped");
                }
                Err(e) => {
                    entry.state = PluginState::Failed;
                    warn!(
                        plugin = %entry.descriptor.id,
                        error = %e,
                        "[PluginHost] ✗ Shutdown failed; continuing teardown"
                    );
                }
            }
        }
    }

    /// The routing view: descriptor plus handler for every `Active` plugin.
    ///
    /// Plugins in any other state contribute nothing here, which is exactly
    /// what makes their message types "unknown" to the router.
    #[must_use]
    pub fn active_handlers(&self) -> Vec<(PluginDescriptor, DynHandler)> {
        self.entries
            .iter()
            .filter(|e| e.state.may_receive_dispatch())
            .map(|e| {
                let handler: DynHandler = Arc::new(PluginHandler(e.plugin.clone()));
                (e.descriptor.clone(), handler)
            })
            .collect()
    }

    /// Current lifecycle state of a plugin.
    #[must_use]
    pub fn state(&self, plugin_id: &str) -> Option<PluginState> {
        self.entries
            .iter()
            .find(|e| e.descriptor.id == plugin_id)
            .map(|e| e.state)
    }

    /// Descriptor of a discovered plugin.
    #[must_use]
    pub fn descriptor(&self, plugin_id: &str) -> Option<&PluginDescriptor> {
        self.entries
            .iter()
            .find(|e| e.descriptor.id == plugin_id)
            .map(|e| &e.descriptor)
    }

    /// Number of plugins the host owns, in any state.
    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.entries.len()
    }
}
