//! # Plugin Lifecycle Tests
//!
//! Full lifecycle through the composed runtime: discovery, sequential
//! initialization with granted services, routing of `Active` plugins,
//! exclusion of failed ones, and reverse-order teardown.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use host_runtime::adapters::JsonFileConfigStore;
    use host_runtime::{build_runtime, HostConfig, HostRuntime};
    use plugin_host::StaticPluginDiscovery;
    use serde_json::json;
    use shared_types::{
        MessageHandler, MessageRequest, MessageResponse, Plugin, PluginContext, PluginError,
        PluginErrorKind, PluginState,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn config_in(dir: &tempfile::TempDir) -> HostConfig {
        std::fs::write(dir.path().join("catalog.json"), "[]").unwrap();
        HostConfig {
            settings_path: dir.path().join("settings.json"),
            catalog_path: dir.path().join("catalog.json"),
            staging_dir: dir.path().join("staging"),
            plugin_dir: dir.path().join("plugins"),
            tool_binary: dir.path().join("modtool"),
        }
    }

    async fn runtime_with(
        dir: &tempfile::TempDir,
        discovery: StaticPluginDiscovery,
    ) -> anyhow::Result<HostRuntime> {
        build_runtime(&config_in(dir), &discovery).await
    }

    /// A plugin that records lifecycle calls and answers one message type.
    struct ThemerPlugin {
        id: &'static str,
        message_type: &'static str,
        fail_init: bool,
        saw_settings: AtomicBool,
        events: Arc<Mutex<Vec<String>>>,
    }

    impl ThemerPlugin {
        fn arc(id: &'static str, message_type: &'static str) -> Arc<Self> {
            Self::build(id, message_type, false, Arc::new(Mutex::new(Vec::new())))
        }

        fn build(
            id: &'static str,
            message_type: &'static str,
            fail_init: bool,
            events: Arc<Mutex<Vec<String>>>,
        ) -> Arc<Self> {
            Arc::new(Self {
                id,
                message_type,
                fail_init,
                saw_settings: AtomicBool::new(false),
                events,
            })
        }
    }

    #[async_trait]
    impl MessageHandler for ThemerPlugin {
        fn handled_message_types(&self) -> Vec<String> {
            vec![self.message_type.to_string()]
        }

        async fn handle_message(&self, request: MessageRequest) -> MessageResponse {
            MessageResponse::success(request.id, json!({"from": self.id}))
        }
    }

    #[async_trait]
    impl Plugin for ThemerPlugin {
        fn id(&self) -> &str {
            self.id
        }
        fn name(&self) -> &str {
            "Themer"
        }
        fn version(&self) -> &str {
            "1.0.0"
        }

        async fn initialize(&self, context: PluginContext) -> Result<(), PluginError> {
            if self.fail_init {
                return Err(PluginError::new(
                    self.id,
                    PluginErrorKind::InitializationFailed,
                    "synthetic failure",
                ));
            }
            if context
                .service::<JsonFileConfigStore>("settings")
                .is_some()
            {
                self.saw_settings.store(true, Ordering::SeqCst);
            }
            self.events.lock().unwrap().push(format!("init:{}", self.id));
            Ok(())
        }

        async fn shutdown(&self) -> Result<(), PluginError> {
            self.events
                .lock()
                .unwrap()
                .push(format!("shutdown:{}", self.id));
            Ok(())
        }
    }

    // =============================================================================
    // LIFECYCLE THROUGH THE RUNTIME
    // =============================================================================

    #[tokio::test]
    async fn test_active_plugin_is_routable() {
        let dir = tempfile::tempdir().unwrap();
        let plugin = ThemerPlugin::arc("com.example.themer", "THEMER_APPLY");
        let runtime = runtime_with(
            &dir,
            StaticPluginDiscovery::new().with_plugin(plugin.clone()),
        )
        .await
        .unwrap();

        assert_eq!(
            runtime.plugin_state("com.example.themer"),
            Some(PluginState::Active)
        );
        assert!(plugin.saw_settings.load(Ordering::SeqCst));

        let resp = runtime
            .dispatch(MessageRequest::with_id("r1", "THEMER_APPLY", json!(null)))
            .await;
        assert!(resp.is_success());
        assert_eq!(resp.data().unwrap()["from"], "com.example.themer");
    }

    #[tokio::test]
    async fn test_failed_init_types_stay_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let events = Arc::new(Mutex::new(Vec::new()));
        let broken = ThemerPlugin::build("com.example.broken", "BROKEN_PING", true, events);
        let runtime = runtime_with(&dir, StaticPluginDiscovery::new().with_plugin(broken))
            .await
            .unwrap();

        assert_eq!(
            runtime.plugin_state("com.example.broken"),
            Some(PluginState::Failed)
        );

        // The plugin declared BROKEN_PING but never became Active, so the
        // router has no route for it.
        let resp = runtime
            .dispatch(MessageRequest::with_id("r1", "BROKEN_PING", json!(null)))
            .await;
        assert!(!resp.is_success());
        assert_eq!(
            resp.error_message(),
            Some("Unknown message type: BROKEN_PING")
        );
    }

    #[tokio::test]
    async fn test_one_bad_plugin_does_not_sink_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let events = Arc::new(Mutex::new(Vec::new()));
        let good = ThemerPlugin::build("com.example.good", "GOOD_PING", false, events.clone());
        let bad = ThemerPlugin::build("com.example.bad", "BAD_PING", true, events);

        let runtime = runtime_with(
            &dir,
            StaticPluginDiscovery::new().with_plugin(bad).with_plugin(good),
        )
        .await
        .unwrap();

        assert_eq!(
            runtime.plugin_state("com.example.bad"),
            Some(PluginState::Failed)
        );
        assert_eq!(
            runtime.plugin_state("com.example.good"),
            Some(PluginState::Active)
        );

        let resp = runtime
            .dispatch(MessageRequest::with_id("r1", "GOOD_PING", json!(null)))
            .await;
        assert!(resp.is_success());
    }

    #[tokio::test]
    async fn test_shutdown_reverses_discovery_order() {
        let dir = tempfile::tempdir().unwrap();
        let events = Arc::new(Mutex::new(Vec::new()));
        let first = ThemerPlugin::build("com.example.first", "FIRST_PING", false, events.clone());
        let second =
            ThemerPlugin::build("com.example.second", "SECOND_PING", false, events.clone());

        let mut runtime = runtime_with(
            &dir,
            StaticPluginDiscovery::new()
                .with_plugin(first)
                .with_plugin(second),
        )
        .await
        .unwrap();

        runtime.shutdown().await;

        assert_eq!(
            runtime.plugin_state("com.example.first"),
            Some(PluginState::Stopped)
        );
        assert_eq!(
            *events.lock().unwrap(),
            vec![
                "init:com.example.first",
                "init:com.example.second",
                "shutdown:com.example.second",
                "shutdown:com.example.first",
            ]
        );
    }

    #[tokio::test]
    async fn test_duplicate_plugin_id_aborts_startup() {
        let dir = tempfile::tempdir().unwrap();
        let discovery = StaticPluginDiscovery::new()
            .with_plugin(ThemerPlugin::arc("com.example.twin", "TWIN_A"))
            .with_plugin(ThemerPlugin::arc("com.example.twin", "TWIN_B"));

        let result = runtime_with(&dir, discovery).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_plugin_type_colliding_with_facade_aborts_startup() {
        let dir = tempfile::tempdir().unwrap();
        let discovery = StaticPluginDiscovery::new()
            .with_plugin(ThemerPlugin::arc("com.example.impostor", "GET_KEY_BINDINGS"));

        // The facade set already claims GET_KEY_BINDINGS; registration
        // collisions are fatal at composition, never at dispatch.
        let result = runtime_with(&dir, discovery).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_facades_survive_without_plugins() {
        let dir = tempfile::tempdir().unwrap();
        let runtime = runtime_with(&dir, StaticPluginDiscovery::new())
            .await
            .unwrap();

        assert!(runtime.route_count() >= 14);
        assert_eq!(runtime.plugin_state("com.example.anything"), None);
    }
}
