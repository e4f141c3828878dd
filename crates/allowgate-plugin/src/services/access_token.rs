use std::sync::Arc;

use async_trait::async_trait;
use tracing::info_span;

use allowgate_core::authz::{authorize, AccessTokenConfig, AuthorizerConfig, Decision};
use allowgate_core::error::{AllowGateError, Result};

use crate::plugin::{AuthService, CheckRequest, ExtAuthPlugin, PluginConfig};

/// Exported name the host uses to find this plugin.
pub const ACCESS_TOKEN_SYMBOL: &str = "AccessToken";

/// Allows requests whose configured header carries an allow-listed value.
#[derive(Default)]
pub struct AccessTokenPlugin;

impl AccessTokenPlugin {
    pub fn new() -> Self {
        Self
    }
}

impl ExtAuthPlugin for AccessTokenPlugin {
    fn name(&self) -> &'static str {
        ACCESS_TOKEN_SYMBOL
    }

    fn new_config(&self, raw: serde_yaml::Value) -> Result<PluginConfig> {
        // absent config block decodes like an empty one
        if raw.is_null() {
            return Ok(PluginConfig::new(AccessTokenConfig::default()));
        }
        let kind = value_kind(&raw);
        let cfg: AccessTokenConfig = serde_yaml::from_value(raw)
            .map_err(|e| AllowGateError::InvalidConfigKind(format!("{kind} ({e})")))?;
        Ok(PluginConfig::new(cfg))
    }

    fn get_service(&self, config: PluginConfig) -> Result<Arc<dyn AuthService>> {
        let raw = config.downcast::<AccessTokenConfig>()?;

        tracing::info!(
            access_token = %raw.access_token,
            allowed_values = raw.allowed_values.len(),
            "parsed access token auth service config"
        );

        Ok(Arc::new(AccessTokenAuthService::new(AuthorizerConfig::from(raw))))
    }
}

/// Running service: an immutable compiled config, shared by every check.
#[derive(Debug, Clone)]
pub struct AccessTokenAuthService {
    config: Arc<AuthorizerConfig>,
}

impl AccessTokenAuthService {
    pub fn new(config: AuthorizerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

#[async_trait]
impl AuthService for AccessTokenAuthService {
    async fn start(&self) -> Result<()> {
        Ok(())
    }

    async fn authorize(&self, req: &CheckRequest) -> Decision {
        let span = info_span!("header_value_plugin", method = %req.method, path = %req.path);
        span.in_scope(|| authorize(&self.config, &req.headers))
    }
}

/// Shape of a raw config block, for error messages.
fn value_kind(v: &serde_yaml::Value) -> &'static str {
    use serde_yaml::Value;

    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}
