//! # Dispatch Flow Tests
//!
//! End-to-end envelope discipline through a fully composed runtime: routing
//! errors, stub replies, facade round-trips, and the success/error
//! exclusivity invariant on every path.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use host_runtime::{build_runtime, HostConfig, HostRuntime};
    use mf_01_warehouse::ModListing;
    use plugin_host::StaticPluginDiscovery;
    use serde_json::json;
    use shared_dispatch::MessageRouter;
    use shared_types::{MessageHandler, MessageRequest, MessageResponse};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Build a runtime over a temp directory with a two-entry catalog.
    async fn runtime_in(dir: &tempfile::TempDir) -> HostRuntime {
        let catalog_path = dir.path().join("catalog.json");
        std::fs::write(
            &catalog_path,
            serde_json::to_string(&vec![
                ModListing {
                    mod_id: "wh-1".to_string(),
                    title: "Garden Furniture".to_string(),
                    author: "ada".to_string(),
                    version: "1.0.0".to_string(),
                    downloads: 41,
                },
                ModListing {
                    mod_id: "wh-2".to_string(),
                    title: "Roof Pack".to_string(),
                    author: "ben".to_string(),
                    version: "0.3.0".to_string(),
                    downloads: 7,
                },
            ])
            .unwrap(),
        )
        .unwrap();

        let config = HostConfig {
            settings_path: dir.path().join("settings.json"),
            catalog_path,
            staging_dir: dir.path().join("staging"),
            plugin_dir: dir.path().join("plugins"),
            tool_binary: dir.path().join("modtool"),
        };

        build_runtime(&config, &StaticPluginDiscovery::new())
            .await
            .expect("runtime composition must succeed")
    }

    /// Asserts the data/error exclusivity invariant on any envelope.
    fn assert_exclusive(resp: &MessageResponse) {
        if resp.is_success() {
            assert!(resp.data().is_some());
            assert!(resp.error_message().is_none());
        } else {
            assert!(resp.data().is_none());
            assert!(resp.error_message().is_some());
        }
    }

    struct SpyHandler {
        invocations: AtomicUsize,
    }

    #[async_trait]
    impl MessageHandler for SpyHandler {
        fn handled_message_types(&self) -> Vec<String> {
            vec!["SPY_PING".to_string()]
        }

        async fn handle_message(&self, request: MessageRequest) -> MessageResponse {
            self.invocations.fetch_add(1, Ordering::SeqCst);
            MessageResponse::success(request.id, json!("pong"))
        }
    }

    // =============================================================================
    // ROUTING ERRORS
    // =============================================================================

    #[tokio::test]
    async fn test_unknown_type_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let runtime = runtime_in(&dir).await;

        let resp = runtime
            .dispatch(MessageRequest::with_id("r2", "NO_SUCH_TYPE", json!(null)))
            .await;

        assert_eq!(resp.id(), "r2");
        assert!(!resp.is_success());
        assert_eq!(
            resp.error_message(),
            Some("Unknown message type: NO_SUCH_TYPE")
        );
        assert_exclusive(&resp);
    }

    #[tokio::test]
    async fn test_empty_type_never_reaches_a_handler() {
        let spy = Arc::new(SpyHandler {
            invocations: AtomicUsize::new(0),
        });
        let mut builder = MessageRouter::builder();
        builder.register("spy", spy.clone()).unwrap();
        let router = builder.build();

        let resp = router
            .dispatch(MessageRequest::with_id("r1", "", json!(null)))
            .await;

        assert_eq!(resp.id(), "r1");
        assert!(!resp.is_success());
        assert_exclusive(&resp);
        assert_eq!(spy.invocations.load(Ordering::SeqCst), 0);
    }

    // =============================================================================
    // FACADE ROUND-TRIPS
    // =============================================================================

    #[tokio::test]
    async fn test_unload_all_stub_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let runtime = runtime_in(&dir).await;

        let resp = runtime
            .dispatch(MessageRequest::with_id("r1", "UNLOAD_ALL", json!(null)))
            .await;

        assert_eq!(resp.id(), "r1");
        assert!(!resp.is_success());
        assert_eq!(resp.error_message(), Some("Not yet implemented"));
        assert_exclusive(&resp);
    }

    #[tokio::test]
    async fn test_warehouse_search_through_runtime() {
        let dir = tempfile::tempdir().unwrap();
        let runtime = runtime_in(&dir).await;

        let resp = runtime
            .dispatch(MessageRequest::with_id(
                "r1",
                "WAREHOUSE_SEARCH",
                json!({"query": "roof"}),
            ))
            .await;

        assert!(resp.is_success());
        assert_exclusive(&resp);
        assert_eq!(resp.data().unwrap()["results"][0]["mod_id"], "wh-2");
    }

    #[tokio::test]
    async fn test_keybinds_set_then_validate() {
        let dir = tempfile::tempdir().unwrap();
        let runtime = runtime_in(&dir).await;

        let set = runtime
            .dispatch(MessageRequest::with_id(
                "r1",
                "SET_KEY_BINDING",
                json!({"action": "open_catalog", "key": "F5"}),
            ))
            .await;
        assert!(set.is_success());

        let report = runtime
            .dispatch(MessageRequest::with_id(
                "r2",
                "VALIDATE_KEY_CONFIG",
                json!(null),
            ))
            .await;
        assert!(report.is_success());
        assert_eq!(report.data().unwrap()["valid"], true);
    }

    // =============================================================================
    // INVARIANTS
    // =============================================================================

    #[tokio::test]
    async fn test_idempotent_read_dispatch() {
        let dir = tempfile::tempdir().unwrap();
        let runtime = runtime_in(&dir).await;

        let req = || MessageRequest::with_id("r1", "GET_KEY_BINDINGS", json!(null));
        let first = runtime.dispatch(req()).await;
        let second = runtime.dispatch(req()).await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_concurrent_dispatches_keep_correlation() {
        let dir = tempfile::tempdir().unwrap();
        let runtime = Arc::new(runtime_in(&dir).await);

        let tasks: Vec<_> = (0..32)
            .map(|i| {
                let runtime = runtime.clone();
                tokio::spawn(async move {
                    let id = format!("r{i}");
                    let resp = runtime
                        .dispatch(MessageRequest::with_id(&id, "GET_KEY_BINDINGS", json!(null)))
                        .await;
                    (id, resp)
                })
            })
            .collect();

        for task in tasks {
            let (id, resp) = task.await.unwrap();
            assert_eq!(resp.id(), id);
            assert!(resp.is_success());
        }
    }

    #[tokio::test]
    async fn test_every_facade_type_answers_with_an_envelope() {
        let dir = tempfile::tempdir().unwrap();
        let runtime = runtime_in(&dir).await;

        // All registered types, empty payloads: some succeed, some return
        // param errors or stub errors - but every reply is a well-formed,
        // correlated envelope.
        for (i, message_type) in [
            "WAREHOUSE_SEARCH",
            "WAREHOUSE_DOWNLOAD",
            "SCAN_CORRUPTED_MODS",
            "FIX_CORRUPTED_MOD",
            "GET_KEY_BINDINGS",
            "SET_KEY_BINDING",
            "VALIDATE_KEY_CONFIG",
            "RENAME_OBJECT",
            "VALIDATE_OBJECT_NAME",
            "UNLOAD_OBJECT",
            "UNLOAD_CATEGORY",
            "UNLOAD_ALL",
            "TOOL_GET_VERSION",
            "TOOL_SET_VERSION",
        ]
        .iter()
        .enumerate()
        {
            let id = format!("r{i}");
            let resp = runtime
                .dispatch(MessageRequest::with_id(&id, *message_type, json!(null)))
                .await;
            assert_eq!(resp.id(), id, "correlation lost for {message_type}");
            assert_exclusive(&resp);
        }
    }
}
