//! # Shared Dispatch - Message Router for Inter-Module Communication
//!
//! ## Architecture Rules
//!
//! - All facade/plugin invocation goes through [`MessageRouter::dispatch`] ONLY
//! - **Direct calls between feature modules are FORBIDDEN**
//! - Every request is answered with exactly one envelope, success or error
//!
//! ## Routing
//!
//! ```text
//! ┌──────────────┐   dispatch(request)   ┌──────────────────┐
//! │  UI / caller │ ────────────────────→ │  MessageRouter   │
//! └──────────────┘                       │  type → handler  │
//!        ▲                               └────────┬─────────┘
//!        │            response envelope           │ exact string match
//!        └────────────────────────────────────────┤
//!                                                 ▼
//!                                   ┌──────────────────────────┐
//!                                   │ facade / Active plugin   │
//!                                   └──────────────────────────┘
//! ```
//!
//! ## Failure Isolation
//!
//! - Routing errors (empty or unknown type) are synthesized error envelopes,
//!   never fatal to the host.
//! - A handler that panics is caught at the router and converted to an error
//!   envelope correlated by request id. Nothing propagates to the caller.
//! - Duplicate registrations are rejected eagerly at build time, before any
//!   dispatch is possible.

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod router;

pub use router::{MessageRouter, RouterBuilder};
