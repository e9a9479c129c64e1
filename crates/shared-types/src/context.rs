//! # Plugin Context
//!
//! The sandboxed facility handed to a plugin during initialization. It is the
//! isolation boundary: a plugin can log through the host-owned sink and use
//! the services the host explicitly granted it, and nothing else. There is no
//! implicit inheritance of host internals.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Log severity levels exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Verbose diagnostic output.
    Debug,
    /// Normal operational messages.
    Info,
    /// Something unexpected but recoverable.
    Warning,
    /// A failure the plugin could not recover from.
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Host-owned structured logging destination.
///
/// The log format behind this trait is the host's business; plugins only see
/// `(level, message)` pairs.
pub trait LogSink: Send + Sync {
    /// Write one structured log entry attributed to `plugin_id`.
    fn log(&self, plugin_id: &str, level: LogLevel, message: &str);
}

/// Default sink forwarding plugin log entries into the host's `tracing`
/// pipeline with the plugin id as a structured field.
pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn log(&self, plugin_id: &str, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => tracing::debug!(plugin = plugin_id, "{}", message),
            LogLevel::Info => tracing::info!(plugin = plugin_id, "{}", message),
            LogLevel::Warning => tracing::warn!(plugin = plugin_id, "{}", message),
            LogLevel::Error => tracing::error!(plugin = plugin_id, "{}", message),
        }
    }
}

/// A host-granted, type-erased service handle.
type DynService = Arc<dyn Any + Send + Sync>;

/// The capability surface handed to exactly one plugin.
///
/// Constructed by the host per plugin. Service access must be granted
/// explicitly via [`PluginContext::grant`]; lookups for anything not granted
/// return `None`.
#[derive(Clone)]
pub struct PluginContext {
    /// The plugin this context was built for.
    plugin_id: String,
    /// Host-owned log destination.
    sink: Arc<dyn LogSink>,
    /// Explicitly granted services by name.
    services: HashMap<String, DynService>,
}

impl PluginContext {
    /// Create a context for `plugin_id` writing to `sink`, with no services
    /// granted yet.
    #[must_use]
    pub fn new(plugin_id: impl Into<String>, sink: Arc<dyn LogSink>) -> Self {
        Self {
            plugin_id: plugin_id.into(),
            sink,
            services: HashMap::new(),
        }
    }

    /// The id of the plugin this context belongs to.
    #[must_use]
    pub fn plugin_id(&self) -> &str {
        &self.plugin_id
    }

    /// Grant a named service to the plugin. Builder-style, host-side only.
    #[must_use]
    pub fn grant<T: Any + Send + Sync>(mut self, name: impl Into<String>, service: Arc<T>) -> Self {
        self.services.insert(name.into(), service);
        self
    }

    /// Look up a granted service by name and concrete type.
    ///
    /// Returns `None` if the host never granted it or the type does not match.
    #[must_use]
    pub fn service<T: Any + Send + Sync>(&self, name: &str) -> Option<Arc<T>> {
        self.services
            .get(name)
            .and_then(|s| Arc::clone(s).downcast::<T>().ok())
    }

    /// Write a structured log entry through the host-owned sink.
    pub fn log(&self, level: LogLevel, message: &str) {
        self.sink.log(&self.plugin_id, level, message);
    }
}

impl fmt::Debug for PluginContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginContext")
            .field("plugin_id", &self.plugin_id)
            .field("services", &self.services.keys().collect::<Vec<_>>())
            .finish()
    }
}
