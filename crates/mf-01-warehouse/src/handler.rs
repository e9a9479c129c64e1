//! Envelope adapter for the warehouse port.

use crate::ports::ModWarehouse;
use crate::{MSG_WAREHOUSE_DOWNLOAD, MSG_WAREHOUSE_SEARCH};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use shared_types::{MessageHandler, MessageRequest, MessageResponse};
use std::sync::Arc;
use tracing::debug;

/// Parameters for `WAREHOUSE_SEARCH`.
#[derive(Debug, Deserialize)]
struct SearchParams {
    query: String,
    #[serde(default)]
    page: u32,
}

/// Parameters for `WAREHOUSE_DOWNLOAD`.
#[derive(Debug, Deserialize)]
struct DownloadParams {
    mod_id: String,
}

/// The warehouse feature module's handler.
pub struct WarehouseFacade {
    warehouse: Arc<dyn ModWarehouse>,
}

impl WarehouseFacade {
    /// Construct with an already-built warehouse backend.
    #[must_use]
    pub fn new(warehouse: Arc<dyn ModWarehouse>) -> Self {
        Self { warehouse }
    }

    async fn search(&self, request: MessageRequest) -> MessageResponse {
        let params: SearchParams = match serde_json::from_value(request.payload) {
            Ok(p) => p,
            Err(e) => {
                return MessageResponse::error(request.id, format!("Invalid search params: {e}"))
            }
        };

        debug!(query = %params.query, page = params.page, "[Warehouse] Searching catalog");
        match self.warehouse.search(&params.query, params.page).await {
            Ok(listings) => MessageResponse::success(
                request.id,
                json!({ "results": listings, "page": params.page }),
            ),
            Err(e) => MessageResponse::error(request.id, e.to_string()),
        }
    }

    async fn download(&self, request: MessageRequest) -> MessageResponse {
        let params: DownloadParams = match serde_json::from_value(request.payload) {
            Ok(p) => p,
            Err(e) => {
                return MessageResponse::error(request.id, format!("Invalid download params: {e}"))
            }
        };

        debug!(mod_id = %params.mod_id, "[Warehouse] Staging download");
        match self.warehouse.download(&params.mod_id).await {
            Ok(ticket) => match serde_json::to_value(ticket) {
                Ok(data) => MessageResponse::success(request.id, data),
                Err(e) => MessageResponse::error(request.id, format!("Encoding failed: {e}")),
            },
            Err(e) => MessageResponse::error(request.id, e.to_string()),
        }
    }
}

#[async_trait]
impl MessageHandler for WarehouseFacade {
    fn handled_message_types(&self) -> Vec<String> {
        vec![
            MSG_WAREHOUSE_SEARCH.to_string(),
            MSG_WAREHOUSE_DOWNLOAD.to_string(),
        ]
    }

    async fn handle_message(&self, request: MessageRequest) -> MessageResponse {
        match request.message_type.as_str() {
            MSG_WAREHOUSE_SEARCH => self.search(request).await,
            MSG_WAREHOUSE_DOWNLOAD => self.download(request).await,
            other => MessageResponse::error(
                request.id,
                format!("Warehouse facade cannot handle: {other}"),
            ),
        }
    }
}
