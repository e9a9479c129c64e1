//! # Keybinds Facade (mf-03)
//!
//! Built-in handler for the key-binding editor feature module.
//!
//! ## Message Types
//!
//! | Type | Payload | Result |
//! |------|---------|--------|
//! | `GET_KEY_BINDINGS` | none | full binding table |
//! | `SET_KEY_BINDING` | `{ "action": "...", "key": "..." }` | updated binding |
//! | `VALIDATE_KEY_CONFIG` | none | conflict report |
//!
//! The binding table is handler-local mutable state behind a read-write
//! lock; the router supplies no cross-handler coordination, so protecting it
//! is this facade's job.

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod handler;
pub mod store;

pub use handler::KeybindsFacade;
pub use store::{BindingConflict, KeyBindingStore};

/// Read the full binding table.
pub const MSG_GET_KEY_BINDINGS: &str = "GET_KEY_BINDINGS";
/// Bind one action to a key.
pub const MSG_SET_KEY_BINDING: &str = "SET_KEY_BINDING";
/// Check the table for conflicting bindings.
pub const MSG_VALIDATE_KEY_CONFIG: &str = "VALIDATE_KEY_CONFIG";
