//! SkyTally - daily aircraft sighting reports for Discord
//!
//! Polls a dump1090-compatible ADS-B decoder, resolves each transponder hex
//! to a registration and type, counts the distinct aircraft seen in the
//! current UTC day and keeps a paginated report in a Discord channel up to
//! date by editing the messages it posted earlier.
//!
//! # High-Level API
//!
//! ```ignore
//! use skytally::clock::SystemClock;
//! use skytally::config::ConfigFile;
//! use skytally::service::{self, StatsService};
//!
//! let config = ConfigFile::load()?;
//! let mut stats = StatsService::new(
//!     service::create_resolver(&config)?,
//!     service::create_feed(&config)?,
//!     service::create_discord(&config)?,
//!     SystemClock,
//! );
//! let summary = stats.run_cycle().await?;
//! ```

pub mod clock;
pub mod config;
pub mod feed;
pub mod logging;
pub mod notify;
pub mod registry;
pub mod report;
pub mod service;
pub mod tracker;

/// Version of the SkyTally library and CLI.
///
/// Defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
