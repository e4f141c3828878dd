//! Shared application state: every configured plugin instance, built once.
//!
//! Plugin configs are resolved through the registry at startup and any
//! rejection fails the whole load. Nothing here is mutated afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use allowgate_core::authz::Decision;
use allowgate_core::error::{AllowGateError, Result};

use crate::config::HostConfig;
use crate::plugin::{AuthService, CheckRequest, PluginRegistry};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: HostConfig,
    services: HashMap<String, Arc<dyn AuthService>>,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: HostConfig, registry: &PluginRegistry) -> Result<Self> {
        let mut services = HashMap::new();

        for entry in &cfg.plugins {
            let plugin = registry.get(&entry.exported_symbol).ok_or_else(|| {
                AllowGateError::BadConfig(format!(
                    "plugin {} refers to unknown exported symbol: {} (registered: {:?})",
                    entry.name,
                    entry.exported_symbol,
                    registry.registered()
                ))
            })?;

            let service = plugin
                .new_config(entry.config.clone())
                .and_then(|pc| plugin.get_service(pc))
                .map_err(|e| {
                    tracing::error!(
                        name = %entry.name,
                        plugin = plugin.name(),
                        code = e.kind().as_str(),
                        error = %e,
                        "plugin config rejected"
                    );
                    e
                })?;

            services.insert(entry.name.clone(), service);
        }

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, services }),
        })
    }

    pub fn cfg(&self) -> &HostConfig {
        &self.inner.cfg
    }

    pub fn service(&self, name: &str) -> Option<Arc<dyn AuthService>> {
        self.inner.services.get(name).cloned()
    }

    /// Instance names in config order.
    pub fn plugin_names(&self) -> Vec<&str> {
        self.inner.cfg.plugins.iter().map(|p| p.name.as_str()).collect()
    }

    /// Run every service's start hook, in config order.
    pub async fn start_all(&self) -> Result<()> {
        for name in self.plugin_names() {
            if let Some(svc) = self.inner.services.get(name) {
                svc.start().await?;
                tracing::debug!(%name, "plugin started");
            }
        }
        Ok(())
    }

    /// Check `req` against the named instance. Unknown names are denied.
    pub async fn authorize(&self, name: &str, req: &CheckRequest) -> Decision {
        match self.inner.services.get(name) {
            Some(svc) => svc.authorize(req).await,
            None => {
                tracing::warn!(%name, "no such plugin instance, denying");
                Decision::Denied
            }
        }
    }
}
