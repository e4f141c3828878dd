//! The allow-list decision.
//!
//! `authorize` is a pure function of its inputs. Its only side effect is a
//! single `tracing` record per call; tracing never reports failure back to
//! the caller, so logging cannot change the outcome.

use tracing::info;

use super::config::AuthorizerConfig;
use super::decision::Decision;
use super::headers::RequestHeaders;

/// Decide whether `headers` pass the allow-list in `config`.
///
/// - header missing => Denied (default deny)
/// - header value in allow-list => Allowed + `matched-allowed-headers: true`
/// - otherwise => Denied
pub fn authorize(config: &AuthorizerConfig, headers: &RequestHeaders) -> Decision {
    let header = config.header_name();

    let Some(value) = headers.get(header) else {
        info!(%header, "access token header not found, denying access");
        return Decision::Denied;
    };

    if config.is_allowed(value) {
        info!(%header, "header value matched, allowing request");
        Decision::allowed_with_marker()
    } else {
        info!(%header, "header value does not match allowed values, denying access");
        Decision::Denied
    }
}
