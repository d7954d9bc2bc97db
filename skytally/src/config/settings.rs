//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;
use std::time::Duration;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    /// Aircraft feed settings
    pub feed: FeedSettings,
    /// Identity registry settings
    pub registry: RegistrySettings,
    /// Discord channel settings
    pub discord: DiscordSettings,
    /// Poll schedule settings
    pub schedule: ScheduleSettings,
    /// Report layout settings
    pub report: ReportSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Feed configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSettings {
    /// dump1090 `aircraft.json` URL
    pub url: String,
    /// HTTP timeout in seconds
    pub timeout_secs: u64,
}

impl FeedSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Registry configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrySettings {
    /// Primary aircraft database CSV
    pub primary: PathBuf,
    /// Hand-maintained override CSV (may not exist)
    pub overrides: PathBuf,
}

/// Discord configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscordSettings {
    /// Bot token
    pub token: Option<String>,
    /// Target channel snowflake
    pub channel_id: Option<u64>,
    /// REST API root
    pub api_base: String,
}

/// Schedule configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSettings {
    /// Delay after each cycle, in seconds
    pub interval_secs: u64,
}

impl ScheduleSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

/// Report configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    /// Fields per page (1..=25)
    pub max_fields: usize,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
