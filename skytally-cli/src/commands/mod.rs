//! CLI command implementations.
//!
//! - [`config`] - Configuration management (get, set, list, path, init)
//! - [`lookup`] - Resolve a single hex identifier
//! - [`once`] - Single poll cycle, optionally printing instead of posting
//! - [`run`] - Main command (poll until Ctrl+C)

pub mod config;
pub mod lookup;
pub mod once;
pub mod run;
