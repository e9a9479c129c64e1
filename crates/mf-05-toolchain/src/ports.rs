//! # Toolchain Ports
//!
//! Narrow capability interfaces for the services the facade consumes. The
//! host wires real implementations (settings file, OS process spawning) at
//! composition time; tests wire fixtures.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key-value configuration access.
pub trait ConfigStore: Send + Sync {
    /// Read a config value.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a config value.
    fn set(&self, key: &str, value: &str);
}

/// Captured output of a finished tool process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutput {
    /// Process exit code.
    pub exit_code: i32,
    /// Captured standard output.
    pub stdout: String,
}

/// Errors surfaced by a process runner.
#[derive(Debug, Clone, Error)]
pub enum ToolchainError {
    /// The tool binary could not be found or started.
    #[error("Failed to launch tool: {0}")]
    LaunchFailed(String),

    /// The tool started but exited abnormally.
    #[error("Tool crashed: {0}")]
    Crashed(String),
}

/// Capability interface for launching the external modding tool.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run the tool at `version` with `args` and wait for it to finish.
    async fn run(&self, version: &str, args: &[String]) -> Result<ProcessOutput, ToolchainError>;
}
