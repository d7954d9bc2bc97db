//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use skytally::config::ConfigFileError;
use skytally::feed::FeedError;
use skytally::service::ServiceError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Failed to assemble the service
    ServiceCreation(ServiceError),
    /// A poll cycle failed
    Cycle(ServiceError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::ServiceCreation(ServiceError::MissingSetting { key }) => {
                eprintln!();
                eprintln!("Set it with:");
                eprintln!("  skytally config set {} <value>", key);
            }
            CliError::ServiceCreation(ServiceError::Registry(_)) => {
                eprintln!();
                eprintln!("The primary registry is the OpenSky aircraft database CSV.");
                eprintln!("Download it and point registry.primary at it:");
                eprintln!("  skytally config set registry.primary /path/to/aircraftDatabase.csv");
            }
            CliError::Cycle(ServiceError::Feed(FeedError::Http(_))) => {
                eprintln!();
                eprintln!("Common issues:");
                eprintln!("  1. dump1090/readsb is not running");
                eprintln!("  2. feed.url points at the wrong host or path");
                eprintln!("     (check with: skytally config get feed.url)");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::ServiceCreation(e) => write!(f, "Failed to start service: {}", e),
            CliError::Cycle(e) => write!(f, "Poll cycle failed: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ServiceCreation(e) => Some(e),
            CliError::Cycle(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<ServiceError> for CliError {
    fn from(e: ServiceError) -> Self {
        CliError::ServiceCreation(e)
    }
}
