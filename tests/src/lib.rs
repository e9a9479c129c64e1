//! # Modforge Test Suite
//!
//! Unified test crate for cross-crate flows.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── dispatch_flows.rs    # Router + facade envelope discipline
//!     └── plugin_lifecycle.rs  # Discovery → init → dispatch → teardown
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p mf-tests
//!
//! # By category
//! cargo test -p mf-tests integration::
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod integration;
