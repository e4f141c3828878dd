use std::collections::HashSet;

use serde::Deserialize;

/// Access-token config as the host supplies it.
///
/// Unknown fields are ignored and missing fields fall back to empty values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccessTokenConfig {
    /// Header key to inspect.
    pub access_token: String,
    /// Exact values that grant access. Order and duplicates do not matter.
    pub allowed_values: Vec<String>,
}

/// Compiled authorizer config.
/// Construct once at load time, then share via Arc. There is no mutating API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizerConfig {
    header_name: String,
    allowed_values: HashSet<String>,
}

impl AuthorizerConfig {
    pub fn new<I, S>(header_name: impl Into<String>, allowed_values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header_name: header_name.into(),
            allowed_values: allowed_values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn header_name(&self) -> &str {
        &self.header_name
    }

    pub fn allowed_values(&self) -> &HashSet<String> {
        &self.allowed_values
    }

    /// Exact, case-sensitive membership test.
    pub fn is_allowed(&self, value: &str) -> bool {
        self.allowed_values.contains(value)
    }
}

impl From<&AccessTokenConfig> for AuthorizerConfig {
    fn from(raw: &AccessTokenConfig) -> Self {
        Self::new(raw.access_token.clone(), raw.allowed_values.iter().cloned())
    }
}

impl From<AccessTokenConfig> for AuthorizerConfig {
    fn from(raw: AccessTokenConfig) -> Self {
        Self::new(raw.access_token, raw.allowed_values)
    }
}
