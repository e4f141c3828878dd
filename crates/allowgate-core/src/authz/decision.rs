use serde::{Deserialize, Serialize};

/// Response header injected on an allowed request.
pub const MATCHED_HEADER_KEY: &str = "matched-allowed-headers";
pub const MATCHED_HEADER_VALUE: &str = "true";

/// Instruction to add one header to the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderValueOption {
    pub key: String,
    pub value: String,
}

impl HeaderValueOption {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Outcome of one evaluation. There is no error outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Decision {
    Allowed {
        #[serde(default)]
        headers: Vec<HeaderValueOption>,
    },
    Denied,
}

impl Decision {
    /// Allowed, carrying the `matched-allowed-headers: true` marker.
    pub fn allowed_with_marker() -> Self {
        Decision::Allowed {
            headers: vec![HeaderValueOption::new(MATCHED_HEADER_KEY, MATCHED_HEADER_VALUE)],
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed { .. })
    }

    /// Headers the host should add to the response (empty when denied).
    pub fn response_headers(&self) -> &[HeaderValueOption] {
        match self {
            Decision::Allowed { headers } => headers,
            Decision::Denied => &[],
        }
    }
}
