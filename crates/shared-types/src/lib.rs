//! # Shared Types Crate
//!
//! This crate contains the message envelope, the handler contract, and the
//! plugin lifecycle contract used across the Modforge dispatch boundary.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-module types are defined here.
//! - **Envelope Exclusivity**: A [`MessageResponse`] carries exactly one of
//!   {data, error}. The only way to build one is through the two factory
//!   constructors, so no other shape can exist.
//! - **No Leaked Failures**: Handlers convert every internal failure into an
//!   error envelope correlated by request id. Nothing ever propagates past
//!   the dispatch boundary as a panic.

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod context;
pub mod envelope;
pub mod errors;
pub mod handler;
pub mod plugin;

pub use context::{LogLevel, LogSink, PluginContext, TracingLogSink};
pub use envelope::{MessageRequest, MessageResponse};
pub use errors::{PluginError, PluginErrorKind, RegistrationError};
pub use handler::{DynHandler, MessageHandler};
pub use plugin::{DynPlugin, Plugin, PluginDescriptor, PluginState};
