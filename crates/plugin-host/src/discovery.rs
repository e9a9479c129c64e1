//! # Plugin Discovery Collaborator
//!
//! The host does not scan directories or load binaries itself; an external
//! loader enumerates plugin packages and constructs instances. That loader is
//! out of core scope, so the host consumes it through this narrow trait.

use shared_types::{DynPlugin, PluginError};

/// Enumerates plugin instances for the host to take ownership of.
pub trait PluginDiscovery: Send + Sync {
    /// Construct one instance per discovered plugin.
    ///
    /// Instances are handed over in `Discovered` state; the host drives the
    /// rest of the lifecycle.
    fn discover(&self) -> Result<Vec<DynPlugin>, PluginError>;
}

/// Discovery backed by a fixed, in-memory set of plugin instances.
///
/// Stands in for a binary loader in the runtime and in tests.
#[derive(Default)]
pub struct StaticPluginDiscovery {
    plugins: Vec<DynPlugin>,
}

impl StaticPluginDiscovery {
    /// Create an empty discovery set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plugin instance to the discovery set.
    #[must_use]
    pub fn with_plugin(mut self, plugin: DynPlugin) -> Self {
        self.plugins.push(plugin);
        self
    }
}

impl PluginDiscovery for StaticPluginDiscovery {
    fn discover(&self) -> Result<Vec<DynPlugin>, PluginError> {
        Ok(self.plugins.clone())
    }
}
