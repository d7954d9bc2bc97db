//! Service error types.

use thiserror::Error;

use crate::config::ConfigFileError;
use crate::feed::FeedError;
use crate::notify::ChannelError;
use crate::registry::RegistryError;

/// Errors that can occur while assembling or running the service.
///
/// Only [`ServiceError::Feed`] is returned from a poll cycle; channel
/// failures are reported per page in the cycle summary.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The aircraft feed could not be read.
    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    /// A registry file could not be loaded.
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// The notification channel could not be created.
    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),

    /// The configuration file could not be read.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigFileError),

    /// A required setting is empty.
    #[error("Missing required setting '{key}'")]
    MissingSetting { key: &'static str },
}
