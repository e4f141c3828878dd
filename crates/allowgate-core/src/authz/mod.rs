//! Header allow-list authorization.
//!
//! A request is allowed when one designated header carries a value from a
//! configured allow-list; everything else is denied. The pieces:
//! - `config`: raw host-facing config and the compiled, immutable
//!   `AuthorizerConfig`.
//! - `headers`: read-only request header view.
//! - `decision`: the Allowed/Denied outcome plus response header injection.
//! - `authorizer`: the decision function itself.

pub mod authorizer;
pub mod config;
pub mod decision;
pub mod headers;

pub use authorizer::authorize;
pub use config::{AccessTokenConfig, AuthorizerConfig};
pub use decision::{Decision, HeaderValueOption, MATCHED_HEADER_KEY, MATCHED_HEADER_VALUE};
pub use headers::RequestHeaders;
