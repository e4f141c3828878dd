//! allowgate core: the header allow-list decision, its configuration shape,
//! and the error surface shared by every allowgate crate.
//!
//! Nothing here knows about the host that calls it. The plugin crate adapts
//! these types to the host's capability traits; this crate stays free of any
//! runtime dependency so the decision can be evaluated from any context.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Configuration problems surface as `AllowGateError`; per-request evaluation
//! is total and has no error path at all.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod authz;
pub mod error;

/// Shared result type.
pub use error::{AllowGateError, Result};
