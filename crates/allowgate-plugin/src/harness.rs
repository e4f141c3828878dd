//! Line-oriented check harness used by the dry-run binary.
//!
//! One input line is `{"plugin": "<instance>", "request": {...}}`; one output
//! line is the JSON decision. Bad input never aborts the loop, it is denied.

use serde::Deserialize;

use allowgate_core::authz::Decision;
use allowgate_core::error::{AllowGateError, Result};

use crate::app_state::AppState;
use crate::plugin::CheckRequest;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CheckLine {
    plugin: String,
    #[serde(default)]
    request: CheckRequest,
}

/// Evaluate one input line. `Ok(None)` for blank lines.
pub async fn check_line(state: &AppState, line: &str) -> Result<Option<String>> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let decision = match serde_json::from_str::<CheckLine>(line) {
        Ok(check) => state.authorize(&check.plugin, &check.request).await,
        Err(e) => {
            tracing::warn!(error = %e, "malformed check line, denying");
            Decision::Denied
        }
    };

    serde_json::to_string(&decision)
        .map(Some)
        .map_err(|e| AllowGateError::Internal(format!("encode decision failed: {e}")))
}
