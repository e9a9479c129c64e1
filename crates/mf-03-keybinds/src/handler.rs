//! Envelope adapter for the key-binding store.

use crate::store::KeyBindingStore;
use crate::{MSG_GET_KEY_BINDINGS, MSG_SET_KEY_BINDING, MSG_VALIDATE_KEY_CONFIG};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use shared_types::{MessageHandler, MessageRequest, MessageResponse};
use std::sync::Arc;
use tracing::debug;

/// Parameters for `SET_KEY_BINDING`.
#[derive(Debug, Deserialize)]
struct SetBindingParams {
    action: String,
    key: String,
}

/// The key-binding editor's handler.
pub struct KeybindsFacade {
    store: Arc<KeyBindingStore>,
}

impl KeybindsFacade {
    /// Construct over a shared binding store.
    #[must_use]
    pub fn new(store: Arc<KeyBindingStore>) -> Self {
        Self { store }
    }

    fn get_bindings(&self, request: MessageRequest) -> MessageResponse {
        MessageResponse::success(request.id, json!({ "bindings": self.store.all() }))
    }

    fn set_binding(&self, request: MessageRequest) -> MessageResponse {
        let params: SetBindingParams = match serde_json::from_value(request.payload) {
            Ok(p) => p,
            Err(e) => {
                return MessageResponse::error(request.id, format!("Invalid binding params: {e}"))
            }
        };

        if params.action.trim().is_empty() || params.key.trim().is_empty() {
            return MessageResponse::error(request.id, "action and key must be non-empty");
        }

        debug!(action = %params.action, key = %params.key, "[Keybinds] Updating binding");
        let previous = self.store.set(params.action.clone(), params.key.clone());
        MessageResponse::success(
            request.id,
            json!({
                "action": params.action,
                "key": params.key,
                "previous": previous,
            }),
        )
    }

    fn validate(&self, request: MessageRequest) -> MessageResponse {
        let conflicts = self.store.conflicts();
        MessageResponse::success(
            request.id,
            json!({
                "valid": conflicts.is_empty(),
                "conflicts": conflicts,
            }),
        )
    }
}

#[async_trait]
impl MessageHandler for KeybindsFacade {
    fn handled_message_types(&self) -> Vec<String> {
        vec![
            MSG_GET_KEY_BINDINGS.to_string(),
            MSG_SET_KEY_BINDING.to_string(),
            MSG_VALIDATE_KEY_CONFIG.to_string(),
        ]
    }

    async fn handle_message(&self, request: MessageRequest) -> MessageResponse {
        match request.message_type.as_str() {
            MSG_GET_KEY_BINDINGS => self.get_bindings(request),
            MSG_SET_KEY_BINDING => self.set_binding(request),
            MSG_VALIDATE_KEY_CONFIG => self.validate(request),
            other => MessageResponse::error(
                request.id,
                format!("Keybinds facade cannot handle: {other}"),
            ),
        }
    }
}
