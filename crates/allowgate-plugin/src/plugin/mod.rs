//! Host-facing plugin contract.
//!
//! Re-exports the capability traits and the plugin registry so downstream
//! consumers can depend on this module directly.

pub mod registry;
pub mod traits;

pub use registry::PluginRegistry;
pub use traits::{AuthService, CheckRequest, ExtAuthPlugin, PluginConfig};
