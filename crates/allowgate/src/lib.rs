//! Top-level facade crate for allowgate.
//!
//! Re-exports the core decision types and the plugin library so users can depend on a single crate.

pub mod core {
    pub use allowgate_core::*;
}

pub mod plugin {
    pub use allowgate_plugin::*;
}
