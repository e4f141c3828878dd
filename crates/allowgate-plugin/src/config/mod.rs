//! Host config loader (strict parsing).

pub mod schema;

use std::fs;

use allowgate_core::error::{AllowGateError, Result};

pub use schema::{HostConfig, PluginEntry};

pub fn load_from_file(path: &str) -> Result<HostConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| AllowGateError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<HostConfig> {
    let cfg: HostConfig = serde_yaml::from_str(s)
        .map_err(|e| AllowGateError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
