//! # Handler Contract
//!
//! The capability interface every routable unit implements, whether it is a
//! built-in facade or a dynamically discovered plugin. From the router's point
//! of view the two are indistinguishable.

use crate::envelope::{MessageRequest, MessageResponse};
use async_trait::async_trait;
use std::sync::Arc;

/// The core trait that ALL routable units must implement.
///
/// ## Contract
///
/// - `handled_message_types` is queried **once** at registration time to
///   populate the routing table. A handler must not claim or abandon types
///   afterwards; changing the set requires re-registration.
/// - `handle_message` must never panic outward. Any internal failure is
///   converted to an error envelope carrying the request's id so the caller
///   always receives a correlated reply. The router adds a second catch-all
///   for non-compliant implementations, but that is defense in depth, not an
///   invitation.
#[async_trait]
pub trait MessageHandler: Send + Sync {
    /// The exact message-type tags this handler accepts.
    fn handled_message_types(&self) -> Vec<String>;

    /// Handle one request and return a response envelope.
    async fn handle_message(&self, request: MessageRequest) -> MessageResponse;
}

/// A type-erased, shareable handler reference for the routing table.
pub type DynHandler = Arc<dyn MessageHandler>;
