//! Cross-crate integration flows.

pub mod dispatch_flows;
pub mod plugin_lifecycle;
