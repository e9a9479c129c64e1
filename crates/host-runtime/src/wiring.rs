//! # Composition Wiring
//!
//! Builds the complete dispatch surface in the startup order the lifecycle
//! contract requires:
//!
//! 1. Construct port adapters and facades
//! 2. Discover and initialize all plugins (sequentially, before any dispatch)
//! 3. Freeze the routing table from facades plus `Active` plugins
//!
//! Any registration collision aborts startup here - a configuration error is
//! the only error class allowed to be fatal.

use crate::adapters::{JsonFileConfigStore, LocalCatalogWarehouse, TokioProcessRunner};
use crate::config::HostConfig;
use crate::HostRuntime;
use anyhow::{Context, Result};
use mf_01_warehouse::WarehouseFacade;
use mf_02_integrity::IntegrityFacade;
use mf_03_keybinds::{KeyBindingStore, KeybindsFacade};
use mf_04_unload::UnloadFacade;
use mf_05_toolchain::ToolchainFacade;
use plugin_host::{PluginDiscovery, PluginHost};
use shared_dispatch::MessageRouter;
use shared_types::{LogSink, PluginContext, TracingLogSink};
use std::sync::Arc;
use tracing::info;

/// Compose a ready-to-dispatch runtime.
///
/// `discovery` stands in for the plugin binary loader; everything it yields
/// goes through the full discover → initialize lifecycle before the routing
/// table is frozen.
pub async fn build_runtime(
    config: &HostConfig,
    discovery: &dyn PluginDiscovery,
) -> Result<HostRuntime> {
    info!("[Wiring] Composing host runtime");

    // Port adapters: already-constructed dependencies from the facades' view.
    let settings = Arc::new(JsonFileConfigStore::open(&config.settings_path));
    let warehouse_backend = Arc::new(LocalCatalogWarehouse::new(
        &config.catalog_path,
        &config.staging_dir,
    ));
    let tool_runner = Arc::new(TokioProcessRunner::new(&config.tool_binary));
    let keybinds = Arc::new(KeyBindingStore::with_defaults());

    // Plugin lifecycle phase: all plugins initialized before any dispatch.
    let mut plugins = PluginHost::new();
    plugins
        .discover_from(discovery)
        .context("plugin discovery failed")?;

    let sink: Arc<dyn LogSink> = Arc::new(TracingLogSink);
    let settings_for_plugins = settings.clone();
    let active = plugins
        .initialize_all(move |descriptor| {
            // Each plugin gets its own context; the settings store is the
            // only host service granted by default.
            PluginContext::new(&descriptor.id, sink.clone())
                .grant("settings", settings_for_plugins.clone())
        })
        .await;
    info!(
        discovered = plugins.plugin_count(),
        active, "[Wiring] Plugin initialization phase complete"
    );

    // Routing table: facades first, then Active plugins. A collision between
    // any two of them stops startup.
    let mut builder = MessageRouter::builder();
    builder.register(
        "warehouse",
        Arc::new(WarehouseFacade::new(warehouse_backend)),
    )?;
    builder.register("integrity", Arc::new(IntegrityFacade::new()))?;
    builder.register("keybinds", Arc::new(KeybindsFacade::new(keybinds)))?;
    builder.register("unload", Arc::new(UnloadFacade::new()))?;
    builder.register(
        "toolchain",
        Arc::new(ToolchainFacade::new(settings, tool_runner)),
    )?;

    for (descriptor, handler) in plugins.active_handlers() {
        builder.register(descriptor.id.clone(), handler)?;
    }

    let router = builder.build();
    info!(routes = router.route_count(), "[Wiring] Routing table frozen");

    Ok(HostRuntime::new(router, plugins))
}
