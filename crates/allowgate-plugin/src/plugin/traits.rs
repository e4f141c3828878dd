use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use allowgate_core::authz::{Decision, RequestHeaders};
use allowgate_core::error::{AllowGateError, Result};

/// Request attributes handed over by the host for one check.
/// Only `headers` is consulted by the built-in plugin.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CheckRequest {
    pub method: String,
    pub path: String,
    pub headers: RequestHeaders,
}

impl CheckRequest {
    pub fn with_headers(headers: RequestHeaders) -> Self {
        Self {
            headers,
            ..Self::default()
        }
    }
}

/// Type-erased config instance produced by `ExtAuthPlugin::new_config`.
///
/// The host holds these uniformly and passes them back to `get_service`,
/// which must check that it got its own kind.
pub struct PluginConfig {
    kind: &'static str,
    inner: Box<dyn Any + Send + Sync>,
}

impl PluginConfig {
    pub fn new<T: Any + Send + Sync>(cfg: T) -> Self {
        Self {
            kind: type_name::<T>(),
            inner: Box::new(cfg),
        }
    }

    /// Type name of the wrapped config.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Unwrap into `T`, or `InvalidConfigKind` if it holds something else.
    pub fn downcast<T: Any>(self) -> Result<T> {
        let kind = self.kind;
        self.inner
            .downcast::<T>()
            .map(|b| *b)
            .map_err(|_| AllowGateError::InvalidConfigKind(kind.to_string()))
    }
}

impl fmt::Debug for PluginConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginConfig").field("kind", &self.kind).finish()
    }
}

/// A plugin the host can discover by its exported name.
pub trait ExtAuthPlugin: Send + Sync {
    /// Well-known exported name the host looks the plugin up by.
    fn name(&self) -> &'static str;

    /// Decode the opaque config block from the host config file.
    fn new_config(&self, raw: serde_yaml::Value) -> Result<PluginConfig>;

    /// Build the running service from a config instance.
    fn get_service(&self, config: PluginConfig) -> Result<Arc<dyn AuthService>>;
}

/// Per-request authorization service. Shared across concurrent checks.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Lifecycle hook, called once before the first check.
    async fn start(&self) -> Result<()>;

    /// Evaluate one request. Total: there is no error outcome.
    async fn authorize(&self, req: &CheckRequest) -> Decision;
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[derive(Debug, PartialEq)]
    struct Mine(u8);

    #[test]
    fn downcast_to_own_kind() {
        let pc = PluginConfig::new(Mine(7));
        assert!(pc.kind().ends_with("Mine"));
        assert_eq!(pc.downcast::<Mine>().unwrap(), Mine(7));
    }

    #[test]
    fn downcast_to_other_kind_fails() {
        let pc = PluginConfig::new(String::from("nope"));
        let err = pc.downcast::<Mine>().unwrap_err();
        assert_eq!(err.kind().as_str(), "INVALID_CONFIG_KIND");
        assert!(err.to_string().contains("String"));
    }
}
