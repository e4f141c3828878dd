//! allowgate plugin library entry.
//!
//! This crate adapts the core allow-list decision to the host's capability
//! contract: plugin traits, the built-in access-token plugin, a registry of
//! exported plugins, and the strict host config loader. It is consumed by the
//! dry-run binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod harness;
pub mod plugin;
pub mod services;
