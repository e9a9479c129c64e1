//! # Error Types
//!
//! Startup-time configuration errors and plugin lifecycle errors.
//!
//! Runtime request-handling failures are NOT represented here: they are always
//! recovered locally and reported through the envelope's `error` field. Only
//! composition-time errors are allowed to be fatal.

use thiserror::Error;

/// Errors detected while populating the routing table.
///
/// These are configuration errors: they abort host startup rather than
/// silently picking a winner.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrationError {
    /// Two handlers claimed the same message type.
    #[error("Duplicate message type '{message_type}': claimed by '{existing}' and '{incoming}'")]
    DuplicateMessageType {
        /// The contested type tag.
        message_type: String,
        /// Name of the handler already holding the type.
        existing: String,
        /// Name of the handler attempting to claim it.
        incoming: String,
    },

    /// A handler declared an empty message type.
    #[error("Handler '{handler}' declared an empty message type")]
    EmptyMessageType {
        /// Name of the offending handler.
        handler: String,
    },
}

/// Error raised by plugin lifecycle operations.
#[derive(Debug, Clone, Error)]
#[error("[{plugin_id}] {kind}: {message}")]
pub struct PluginError {
    /// The plugin that raised the error.
    pub plugin_id: String,
    /// Error category.
    pub kind: PluginErrorKind,
    /// Human-readable detail.
    pub message: String,
}

impl PluginError {
    /// Convenience constructor.
    #[must_use]
    pub fn new(
        plugin_id: impl Into<String>,
        kind: PluginErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            plugin_id: plugin_id.into(),
            kind,
            message: message.into(),
        }
    }
}

/// Categories of plugin lifecycle errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginErrorKind {
    /// `initialize` failed; the plugin is excluded from routing.
    InitializationFailed,
    /// `shutdown` failed; logged only, never escalated.
    ShutdownFailed,
    /// Two discovered plugins claimed the same id.
    DuplicateId,
    /// Discovery collaborator failed to enumerate plugins.
    DiscoveryFailed,
}

impl std::fmt::Display for PluginErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InitializationFailed => write!(f, "InitializationFailed"),
            Self::ShutdownFailed => write!(f, "ShutdownFailed"),
            Self::DuplicateId => write!(f, "DuplicateId"),
            Self::DiscoveryFailed => write!(f, "DiscoveryFailed"),
        }
    }
}
