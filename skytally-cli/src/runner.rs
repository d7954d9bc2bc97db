//! CLI runner for common setup.
//!
//! Encapsulates config loading, logging initialization and service assembly
//! so command handlers stay small.

use tracing::info;

use skytally::clock::SystemClock;
use skytally::config::ConfigFile;
use skytally::feed::Dump1090Client;
use skytally::logging::{init_logging, split_log_path, LoggingGuard};
use skytally::notify::NotificationChannel;
use skytally::service::{self, StatsService};

use crate::error::CliError;

/// A service polling dump1090 on the system clock.
pub type CliService<C> = StatsService<Dump1090Client, C, SystemClock>;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Keeps the log writer alive while the runner exists
    _logging_guard: LoggingGuard,
    config: ConfigFile,
}

impl CliRunner {
    /// Load config and initialize logging.
    ///
    /// `stdout_logging` is off for commands whose stdout is their output.
    pub fn new(debug: bool, stdout_logging: bool) -> Result<Self, CliError> {
        let config = ConfigFile::load()?;

        let (log_dir, log_file) = split_log_path(&config.logging.file);
        let logging_guard = init_logging(&log_dir, &log_file, stdout_logging, debug)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            _logging_guard: logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("SkyTally v{}", skytally::VERSION);
        info!(
            feed = %self.config.feed.url,
            "SkyTally CLI: {} command",
            command
        );
    }

    /// Assemble the service around the given channel.
    pub fn create_service<C>(&self, channel: C) -> Result<CliService<C>, CliError>
    where
        C: NotificationChannel,
    {
        let resolver = service::create_resolver(&self.config)?;
        let feed = service::create_feed(&self.config)?;

        Ok(StatsService::new(resolver, feed, channel, SystemClock)
            .with_report_builder(service::create_report_builder(&self.config)))
    }
}
