//! Default values and constants for all configuration settings.

use std::path::PathBuf;

use super::file::config_directory;
use super::settings::*;
use crate::feed::{DEFAULT_FEED_TIMEOUT, DEFAULT_FEED_URL};
use crate::notify::DEFAULT_DISCORD_API_BASE;
use crate::report::MAX_FIELDS_PER_PAGE;

/// Default feed timeout in seconds.
pub const DEFAULT_FEED_TIMEOUT_SECS: u64 = DEFAULT_FEED_TIMEOUT.as_secs();

/// Default delay between poll cycles (3 minutes).
pub const DEFAULT_INTERVAL_SECS: u64 = 180;

/// Default fields per report page.
pub const DEFAULT_MAX_FIELDS: usize = MAX_FIELDS_PER_PAGE;

/// Default primary registry file name inside the config directory.
pub const DEFAULT_PRIMARY_FILE: &str = "aircraft-database.csv";

/// Default override registry file name inside the config directory.
pub const DEFAULT_OVERRIDES_FILE: &str = "overrides.csv";

/// Default log file name inside the config directory.
pub const DEFAULT_LOG_FILE: &str = "skytally.log";

pub fn default_primary_path() -> PathBuf {
    config_directory().join(DEFAULT_PRIMARY_FILE)
}

pub fn default_overrides_path() -> PathBuf {
    config_directory().join(DEFAULT_OVERRIDES_FILE)
}

pub fn default_log_path() -> PathBuf {
    config_directory().join(DEFAULT_LOG_FILE)
}

/// Clamps the page capacity to what Discord accepts, warning if clamped.
pub(super) fn clamp_max_fields(value: usize) -> usize {
    let clamped = value.clamp(1, MAX_FIELDS_PER_PAGE);
    if clamped != value {
        tracing::warn!(
            requested = value,
            max = MAX_FIELDS_PER_PAGE,
            "report.max_fields out of range, clamping to {}",
            clamped
        );
    }
    clamped
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            feed: FeedSettings {
                url: DEFAULT_FEED_URL.to_string(),
                timeout_secs: DEFAULT_FEED_TIMEOUT_SECS,
            },
            registry: RegistrySettings {
                primary: default_primary_path(),
                overrides: default_overrides_path(),
            },
            discord: DiscordSettings {
                token: None,
                channel_id: None,
                api_base: DEFAULT_DISCORD_API_BASE.to_string(),
            },
            schedule: ScheduleSettings {
                interval_secs: DEFAULT_INTERVAL_SECS,
            },
            report: ReportSettings {
                max_fields: DEFAULT_MAX_FIELDS,
            },
            logging: LoggingSettings {
                file: default_log_path(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_max_fields() {
        assert_eq!(clamp_max_fields(0), 1);
        assert_eq!(clamp_max_fields(10), 10);
        assert_eq!(clamp_max_fields(40), 25);
    }

    #[test]
    fn test_default_paths_under_config_dir() {
        let config = ConfigFile::default();
        assert!(config.registry.primary.ends_with(".skytally/aircraft-database.csv"));
        assert!(config.registry.overrides.ends_with(".skytally/overrides.csv"));
        assert!(config.logging.file.ends_with(".skytally/skytally.log"));
    }
}
