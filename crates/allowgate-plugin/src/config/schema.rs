use std::collections::HashSet;

use serde::Deserialize;
use allowgate_core::error::{AllowGateError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostConfig {
    pub version: u32,

    #[serde(default)]
    pub plugins: Vec<PluginEntry>,
}

impl HostConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(AllowGateError::BadConfig(format!(
                "unsupported config version: {}",
                self.version
            )));
        }
        if self.plugins.is_empty() {
            return Err(AllowGateError::BadConfig("plugins must not be empty".into()));
        }

        let mut seen = HashSet::new();
        for p in &self.plugins {
            p.validate()?;
            if !seen.insert(p.name.as_str()) {
                return Err(AllowGateError::BadConfig(format!(
                    "duplicate plugin name: {}",
                    p.name
                )));
            }
        }

        Ok(())
    }
}

/// One plugin instance. `config` is opaque here; the plugin decodes it and
/// ignores fields it does not know.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PluginEntry {
    pub name: String,

    pub exported_symbol: String,

    #[serde(default)]
    pub config: serde_yaml::Value,
}

impl PluginEntry {
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(AllowGateError::BadConfig("plugins[].name must not be empty".into()));
        }
        if self.exported_symbol.is_empty() {
            return Err(AllowGateError::BadConfig(format!(
                "plugin {} has an empty exported_symbol",
                self.name
            )));
        }
        Ok(())
    }
}
