//! # Plugin Host - Runtime Discovery and Lifecycle Management
//!
//! Manages plugin registration, the initialize/shutdown phases, and the
//! state machine gating which plugins are eligible for dispatch.
//!
//! ## Features
//!
//! - **Discovery intake**: plugins constructed by a discovery collaborator
//!   are added with duplicate-id rejection
//! - **Sequential lifecycle phases**: startup initializes all plugins before
//!   any dispatch; teardown shuts all down, continuing past failures
//! - **Failure containment**: a plugin that fails to initialize is marked
//!   `Failed` and its message types stay unknown to the router
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut host = PluginHost::new();
//! for plugin in discovery.discover()? {
//!     host.add(plugin)?;
//! }
//! host.initialize_all(|descriptor| {
//!     PluginContext::new(&descriptor.id, sink.clone())
//! }).await;
//!
//! // Populate the router from Active plugins only
//! for (descriptor, handler) in host.active_handlers() {
//!     builder.register(descriptor.id.clone(), handler)?;
//! }
//!
//! // Later: graceful teardown
//! host.shutdown_all().await;
//! ```

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod discovery;
pub mod host;

pub use discovery::{PluginDiscovery, StaticPluginDiscovery};
pub use host::PluginHost;
