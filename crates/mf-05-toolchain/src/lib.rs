//! # Toolchain Facade (mf-05)
//!
//! Built-in handler for the versioned-tool manager feature module.
//!
//! ## Message Types
//!
//! | Type | Payload | Result |
//! |------|---------|--------|
//! | `TOOL_GET_VERSION` | none | pinned + installed version |
//! | `TOOL_SET_VERSION` | `{ "version": "..." }` | updated pin |
//! | `TOOL_LAUNCH` | `{ "args": ["..."] }` | process exit report |
//!
//! Config persistence and process launching arrive as already-constructed
//! port implementations; the facade only translates envelopes.

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod handler;
pub mod ports;

pub use handler::ToolchainFacade;
pub use ports::{ConfigStore, ProcessOutput, ProcessRunner, ToolchainError};

/// Report the pinned and installed tool versions.
pub const MSG_TOOL_GET_VERSION: &str = "TOOL_GET_VERSION";
/// Pin the tool to a version.
pub const MSG_TOOL_SET_VERSION: &str = "TOOL_SET_VERSION";
/// Launch the tool.
pub const MSG_TOOL_LAUNCH: &str = "TOOL_LAUNCH";

/// Config key holding the pinned tool version.
pub const CONFIG_KEY_PINNED_VERSION: &str = "toolchain.pinned_version";
