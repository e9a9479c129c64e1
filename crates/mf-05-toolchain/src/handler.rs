//! Envelope adapter for the toolchain ports.

use crate::ports::{ConfigStore, ProcessRunner};
use crate::{
    CONFIG_KEY_PINNED_VERSION, MSG_TOOL_GET_VERSION, MSG_TOOL_LAUNCH, MSG_TOOL_SET_VERSION,
};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use shared_types::{MessageHandler, MessageRequest, MessageResponse};
use std::sync::Arc;
use tracing::{debug, info};

/// Fallback when no version has been pinned yet.
const DEFAULT_VERSION: &str = "latest";

/// Parameters for `TOOL_SET_VERSION`.
#[derive(Debug, Deserialize)]
struct SetVersionParams {
    version: String,
}

/// Parameters for `TOOL_LAUNCH`.
#[derive(Debug, Deserialize, Default)]
struct LaunchParams {
    #[serde(default)]
    args: Vec<String>,
}

/// The versioned-tool manager's handler.
pub struct ToolchainFacade {
    config: Arc<dyn ConfigStore>,
    runner: Arc<dyn ProcessRunner>,
}

impl ToolchainFacade {
    /// Construct with already-built config and process collaborators.
    #[must_use]
    pub fn new(config: Arc<dyn ConfigStore>, runner: Arc<dyn ProcessRunner>) -> Self {
        Self { config, runner }
    }

    fn pinned_version(&self) -> String {
        self.config
            .get(CONFIG_KEY_PINNED_VERSION)
            .unwrap_or_else(|| DEFAULT_VERSION.to_string())
    }

    fn get_version(&self, request: MessageRequest) -> MessageResponse {
        MessageResponse::success(request.id, json!({ "pinned": self.pinned_version() }))
    }

    fn set_version(&self, request: MessageRequest) -> MessageResponse {
        let params: SetVersionParams = match serde_json::from_value(request.payload) {
            Ok(p) => p,
            Err(e) => {
                return MessageResponse::error(request.id, format!("Invalid version params: {e}"))
            }
        };

        if params.version.trim().is_empty() {
            return MessageResponse::error(request.id, "version must be non-empty");
        }

        info!(version = %params.version, "[Toolchain] Pinning tool version");
        self.config.set(CONFIG_KEY_PINNED_VERSION, &params.version);
        MessageResponse::success(request.id, json!({ "pinned": params.version }))
    }

    async fn launch(&self, request: MessageRequest) -> MessageResponse {
        let params: LaunchParams = if request.payload.is_null() {
            LaunchParams::default()
        } else {
            match serde_json::from_value(request.payload) {
                Ok(p) => p,
                Err(e) => {
                    return MessageResponse::error(
                        request.id,
                        format!("Invalid launch params: {e}"),
                    )
                }
            }
        };

        let version = self.pinned_version();
        debug!(version = %version, args = params.args.len(), "[Toolchain] Launching tool");

        match self.runner.run(&version, &params.args).await {
            Ok(output) => MessageResponse::success(
                request.id,
                json!({
                    "version": version,
                    "exit_code": output.exit_code,
                    "stdout": output.stdout,
                }),
            ),
            Err(e) => MessageResponse::error(request.id, e.to_string()),
        }
    }
}

#[async_trait]
impl MessageHandler for ToolchainFacade {
    fn handled_message_types(&self) -> Vec<String> {
        vec![
            MSG_TOOL_GET_VERSION.to_string(),
            MSG_TOOL_SET_VERSION.to_string(),
            MSG_TOOL_LAUNCH.to_string(),
        ]
    }

    async fn handle_message(&self, request: MessageRequest) -> MessageResponse {
        match request.message_type.as_str() {
            MSG_TOOL_GET_VERSION => self.get_version(request),
            MSG_TOOL_SET_VERSION => self.set_version(request),
            MSG_TOOL_LAUNCH => self.launch(request).await,
            other => MessageResponse::error(
                request.id,
                format!("Toolchain facade cannot handle: {other}"),
            ),
        }
    }
}
