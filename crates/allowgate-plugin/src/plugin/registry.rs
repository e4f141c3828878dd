use std::sync::Arc;

use dashmap::DashMap;

use crate::plugin::ExtAuthPlugin;
use crate::services::AccessTokenPlugin;

/// Exported-name -> plugin registry. Stands in for symbol lookup on the host.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: DashMap<&'static str, Arc<dyn ExtAuthPlugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self {
            plugins: DashMap::new(),
        }
    }

    /// Registry with every built-in plugin registered.
    pub fn with_builtin() -> Self {
        let reg = Self::new();
        reg.register(Arc::new(AccessTokenPlugin::new()));
        reg
    }

    pub fn register(&self, plugin: Arc<dyn ExtAuthPlugin>) {
        let name = plugin.name();
        if self.plugins.insert(name, plugin).is_some() {
            tracing::warn!(plugin = name, "plugin registered twice, keeping the latest");
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn ExtAuthPlugin>> {
        self.plugins.get(name).map(|e| Arc::clone(e.value()))
    }

    pub fn registered(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.plugins.iter().map(|e| *e.key()).collect();
        names.sort_unstable();
        names
    }
}
