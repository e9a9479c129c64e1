//! # Message Router
//!
//! Owns the registration table (message type -> handler) and performs the
//! actual routing on every call.
//!
//! The table is populated once at composition time and immutable afterwards,
//! so `dispatch` takes `&self` and the host may run any number of dispatches
//! concurrently without a global lock. Mutable state inside a handler is that
//! handler's responsibility to protect.

use futures::FutureExt;
use shared_types::{DynHandler, MessageRequest, MessageResponse, RegistrationError};
use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use tracing::{debug, error, info, warn};

/// One row of the registration table.
struct RegisteredHandler {
    /// Registration name, used in configuration errors and logs.
    name: String,
    /// The handler instance. Many types may map to the same instance.
    handler: DynHandler,
}

/// Composition-time builder for [`MessageRouter`].
///
/// Collision detection happens here, eagerly: registering a second handler
/// for an already-claimed message type is a configuration error that must
/// stop host startup, never a silent override.
#[derive(Default)]
pub struct RouterBuilder {
    routes: HashMap<String, RegisteredHandler>,
}

impl RouterBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under `name` for every message type it declares.
    ///
    /// `handled_message_types` is queried exactly once, here. An empty type
    /// tag or a collision with a previously registered handler is a
    /// [`RegistrationError`].
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: DynHandler,
    ) -> Result<(), RegistrationError> {
        let name = name.into();

        for message_type in handler.handled_message_types() {
            if message_type.trim().is_empty() {
                return Err(RegistrationError::EmptyMessageType {
                    handler: name.clone(),
                });
            }

            if let Some(existing) = self.routes.get(&message_type) {
                return Err(RegistrationError::DuplicateMessageType {
                    message_type,
                    existing: existing.name.clone(),
                    incoming: name.clone(),
                });
            }

            debug!(
                handler = %name,
                message_type = %message_type,
                "[Router] Route registered"
            );
            self.routes.insert(
                message_type,
                RegisteredHandler {
                    name: name.clone(),
                    handler: handler.clone(),
                },
            );
        }

        Ok(())
    }

    /// Freeze the table into an immutable router.
    #[must_use]
    pub fn build(self) -> MessageRouter {
        info!("[Router] Table frozen with {} routes", self.routes.len());
        MessageRouter {
            routes: self.routes,
        }
    }
}

/// The dispatch router: resolves a request's message type to exactly one
/// handler and executes it with failure isolation.
///
/// Explicitly constructed and injected - no ambient singleton - so tests can
/// build isolated routers with controlled handler sets.
pub struct MessageRouter {
    routes: HashMap<String, RegisteredHandler>,
}

impl MessageRouter {
    /// Start building a router.
    #[must_use]
    pub fn builder() -> RouterBuilder {
        RouterBuilder::new()
    }

    /// Route one request to its handler and return the response envelope.
    ///
    /// Never returns an error and never panics: routing failures and handler
    /// panics are synthesized into error envelopes correlated by the
    /// request's id.
    pub async fn dispatch(&self, request: MessageRequest) -> MessageResponse {
        let request_id = request.id.clone();

        // Step 1: reject an absent type before any lookup.
        if request.message_type.trim().is_empty() {
            warn!(request_id = %request_id, "[Router] Request without a message type");
            return MessageResponse::error(request_id, "missing or empty type");
        }

        // Step 2: exact string match only; prefixes are convention, not routing.
        let Some(entry) = self.routes.get(&request.message_type) else {
            warn!(
                request_id = %request_id,
                message_type = %request.message_type,
                "[Router] No handler registered"
            );
            return MessageResponse::error(
                request_id,
                format!("Unknown message type: {}", request.message_type),
            );
        };

        let message_type = request.message_type.clone();
        let handler_name = entry.name.clone();
        debug!(
            request_id = %request_id,
            message_type = %message_type,
            handler = %handler_name,
            "[Router] Dispatching"
        );

        // Step 3: invoke with panic isolation. Handlers are contractually
        // required to catch their own failures; this catch-all exists for
        // non-compliant implementations and is mandatory.
        let outcome = AssertUnwindSafe(entry.handler.handle_message(request))
            .catch_unwind()
            .await;

        match outcome {
            Ok(response) => {
                if response.id() != request_id {
                    warn!(
                        request_id = %request_id,
                        response_id = %response.id(),
                        handler = %handler_name,
                        "[Router] Handler returned a mismatched correlation id"
                    );
                }
                response
            }
            Err(panic) => {
                let reason = panic_reason(panic.as_ref());
                error!(
                    request_id = %request_id,
                    message_type = %message_type,
                    handler = %handler_name,
                    reason = %reason,
                    "[Router] Handler panicked; synthesizing error envelope"
                );
                MessageResponse::error(
                    request_id,
                    format!("Handler '{handler_name}' failed: {reason}"),
                )
            }
        }
    }

    /// Whether a message type has a registered handler.
    #[must_use]
    pub fn is_registered(&self, message_type: &str) -> bool {
        self.routes.contains_key(message_type)
    }

    /// Number of registered message types.
    #[must_use]
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// All registered message types, for composition-time logging.
    #[must_use]
    pub fn registered_types(&self) -> Vec<&str> {
        self.routes.keys().map(String::as_str).collect()
    }
}

/// Extract a readable reason from a panic payload.
fn panic_reason(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
