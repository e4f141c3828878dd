//! Shared error type across allowgate crates.

use thiserror::Error;

/// Stable error codes (used as log fields and by tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Configuration object has the wrong shape for the plugin.
    InvalidConfigKind,
    /// Host configuration file rejected.
    BadConfig,
    /// Internal failure (I/O etc).
    Internal,
}

impl ErrorKind {
    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidConfigKind => "INVALID_CONFIG_KIND",
            ErrorKind::BadConfig => "BAD_CONFIG",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, AllowGateError>;

/// Unified error type used by core and plugin crates.
///
/// Only configuration loading can fail. Evaluating a request never returns
/// one of these.
#[derive(Debug, Error)]
pub enum AllowGateError {
    #[error("unexpected config type {0}")]
    InvalidConfigKind(String),
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl AllowGateError {
    /// Map the error to its stable code.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AllowGateError::InvalidConfigKind(_) => ErrorKind::InvalidConfigKind,
            AllowGateError::BadConfig(_) => ErrorKind::BadConfig,
            AllowGateError::Internal(_) => ErrorKind::Internal,
        }
    }
}
