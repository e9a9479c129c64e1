//! Host process entry point.

use anyhow::Result;
use host_runtime::{build_runtime, HostConfig};
use modforge_telemetry::{init_telemetry, TelemetryConfig};
use plugin_host::StaticPluginDiscovery;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_telemetry(&TelemetryConfig::from_env())?;

    let config = HostConfig::from_env();
    info!(plugin_dir = %config.plugin_dir.display(), "Starting Modforge host");

    // Binary plugin loading is handled by an external loader; until it is
    // wired in, startup runs with the built-in facade set only.
    let discovery = StaticPluginDiscovery::new();
    let mut runtime = build_runtime(&config, &discovery).await?;

    info!(routes = runtime.route_count(), "Host ready");

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");

    runtime.shutdown().await;
    info!("Host stopped");
    Ok(())
}
