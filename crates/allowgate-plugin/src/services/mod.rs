//! Built-in plugins.

pub mod access_token;

pub use access_token::{AccessTokenAuthService, AccessTokenPlugin, ACCESS_TOKEN_SYMBOL};
