//! # Unload Facade (mf-04)
//!
//! Built-in handler for the object-mod unloader feature module.
//!
//! ## Message Types
//!
//! | Type | Status |
//! |------|--------|
//! | `RENAME_OBJECT` | stub |
//! | `VALIDATE_OBJECT_NAME` | stub |
//! | `UNLOAD_OBJECT` | stub |
//! | `UNLOAD_CATEGORY` | stub |
//! | `UNLOAD_ALL` | stub |
//!
//! The unload engine has not been wired in; all operations return an error
//! envelope so callers get a correlated, well-formed reply. The types are
//! claimed now so the routing surface does not shift when the engine lands.

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

use async_trait::async_trait;
use shared_types::{MessageHandler, MessageRequest, MessageResponse};

/// Rename a tracked object mod.
pub const MSG_RENAME_OBJECT: &str = "RENAME_OBJECT";
/// Check a proposed object name.
pub const MSG_VALIDATE_OBJECT_NAME: &str = "VALIDATE_OBJECT_NAME";
/// Unload one object mod.
pub const MSG_UNLOAD_OBJECT: &str = "UNLOAD_OBJECT";
/// Unload every object mod in a category.
pub const MSG_UNLOAD_CATEGORY: &str = "UNLOAD_CATEGORY";
/// Unload every object mod.
pub const MSG_UNLOAD_ALL: &str = "UNLOAD_ALL";

/// The object-mod unloader's handler.
#[derive(Default)]
pub struct UnloadFacade;

impl UnloadFacade {
    /// Construct the facade.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MessageHandler for UnloadFacade {
    fn handled_message_types(&self) -> Vec<String> {
        vec![
            MSG_RENAME_OBJECT.to_string(),
            MSG_VALIDATE_OBJECT_NAME.to_string(),
            MSG_UNLOAD_OBJECT.to_string(),
            MSG_UNLOAD_CATEGORY.to_string(),
            MSG_UNLOAD_ALL.to_string(),
        ]
    }

    async fn handle_message(&self, request: MessageRequest) -> MessageResponse {
        MessageResponse::error(request.id, "Not yet implemented")
    }
}
