//! # Integrity Facade (mf-02)
//!
//! Built-in handler for the mod-file corruption scanner.
//!
//! ## Message Types
//!
//! | Type | Status |
//! |------|--------|
//! | `SCAN_CORRUPTED_MODS` | stub |
//! | `FIX_CORRUPTED_MOD` | stub |
//!
//! The scanning engine has not been wired in; both operations return an
//! error envelope so callers get a correlated, well-formed reply instead of
//! an unknown-type error. The message types are claimed now so the routing
//! surface does not shift when the engine lands.

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

use async_trait::async_trait;
use shared_types::{MessageHandler, MessageRequest, MessageResponse};

/// Scan the mod library for corrupted files.
pub const MSG_SCAN_CORRUPTED_MODS: &str = "SCAN_CORRUPTED_MODS";
/// Attempt repair of one corrupted mod.
pub const MSG_FIX_CORRUPTED_MOD: &str = "FIX_CORRUPTED_MOD";

/// The corruption-scanner feature module's handler.
#[derive(Default)]
pub struct IntegrityFacade;

impl IntegrityFacade {
    /// Construct the facade.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MessageHandler for IntegrityFacade {
    fn handled_message_types(&self) -> Vec<String> {
        vec![
            MSG_SCAN_CORRUPTED_MODS.to_string(),
            MSG_FIX_CORRUPTED_MOD.to_string(),
        ]
    }

    async fn handle_message(&self, request: MessageRequest) -> MessageResponse {
        MessageResponse::error(request.id, "Not yet implemented")
    }
}
