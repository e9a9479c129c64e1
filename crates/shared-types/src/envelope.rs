//! # Message Envelope
//!
//! The universal request/response shapes for ALL communication across the
//! dispatch boundary.
//!
//! ## Envelope Rules
//!
//! - Requests are immutable once created; the `id` is the sole correlation
//!   token between a request and its response.
//! - Responses carry exactly one of {data, error}, never both, never neither.
//!   The two factory constructors are the only way to build a response, so the
//!   invariant holds by construction.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A request routed through the dispatch boundary.
///
/// The `message_type` is an exact-match string tag (e.g. `WAREHOUSE_SEARCH`);
/// facade/plugin prefixes are a readability convention the router never
/// interprets structurally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRequest {
    /// Caller-generated correlation token, unique per call.
    pub id: String,

    /// String tag identifying the requested operation.
    #[serde(rename = "type")]
    pub message_type: String,

    /// Operation-specific payload; facades deserialize typed params from it.
    #[serde(default)]
    pub payload: Value,
}

impl MessageRequest {
    /// Create a request with a freshly generated correlation id.
    #[must_use]
    pub fn new(message_type: impl Into<String>, payload: Value) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            message_type: message_type.into(),
            payload,
        }
    }

    /// Create a request with an explicit correlation id.
    ///
    /// Used by callers that track correlation themselves (e.g. the UI layer).
    #[must_use]
    pub fn with_id(
        id: impl Into<String>,
        message_type: impl Into<String>,
        payload: Value,
    ) -> Self {
        Self {
            id: id.into(),
            message_type: message_type.into(),
            payload,
        }
    }
}

/// A response returned from the dispatch boundary.
///
/// Fields are private: [`MessageResponse::success`] and
/// [`MessageResponse::error`] are the only constructors, which is what
/// guarantees the data/error exclusivity invariant system-wide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageResponse {
    /// Echoes the originating request's id.
    id: String,

    /// Whether the operation succeeded.
    success: bool,

    /// Present iff `success` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,

    /// Human-readable failure message, present iff `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl MessageResponse {
    /// Build a success envelope carrying `data`.
    #[must_use]
    pub fn success(id: impl Into<String>, data: Value) -> Self {
        Self {
            id: id.into(),
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Build an error envelope carrying a human-readable message.
    #[must_use]
    pub fn error(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// The correlation id echoed from the request.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the operation succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Success payload; `Some` iff [`Self::is_success`].
    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// Failure message; `Some` iff not [`Self::is_success`].
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
