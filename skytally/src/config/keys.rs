//! Configuration key access and validation.
//!
//! Type-safe get/set of configuration values by `section.key` name, used by
//! the `config` CLI command.

use std::str::FromStr;
use thiserror::Error;

use super::defaults::clamp_max_fields;
use super::parser::expand_tilde;
use super::settings::ConfigFile;
use super::writer::path_to_string;

/// Errors that can occur when getting or setting configuration values.
#[derive(Debug, Error)]
pub enum ConfigKeyError {
    /// Unknown configuration key.
    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),

    /// Validation failed for the value.
    #[error("Invalid value for {key}: {reason}")]
    ValidationFailed { key: String, reason: String },
}

/// Supported configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    FeedUrl,
    FeedTimeoutSecs,
    RegistryPrimary,
    RegistryOverrides,
    DiscordToken,
    DiscordChannelId,
    DiscordApiBase,
    ScheduleIntervalSecs,
    ReportMaxFields,
    LoggingFile,
}

impl FromStr for ConfigKey {
    type Err = ConfigKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|key| key.name() == lower)
            .ok_or_else(|| ConfigKeyError::UnknownKey(s.to_string()))
    }
}

impl ConfigKey {
    /// Get the canonical key name (e.g., "discord.channel_id").
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::FeedUrl => "feed.url",
            ConfigKey::FeedTimeoutSecs => "feed.timeout_secs",
            ConfigKey::RegistryPrimary => "registry.primary",
            ConfigKey::RegistryOverrides => "registry.overrides",
            ConfigKey::DiscordToken => "discord.token",
            ConfigKey::DiscordChannelId => "discord.channel_id",
            ConfigKey::DiscordApiBase => "discord.api_base",
            ConfigKey::ScheduleIntervalSecs => "schedule.interval_secs",
            ConfigKey::ReportMaxFields => "report.max_fields",
            ConfigKey::LoggingFile => "logging.file",
        }
    }

    /// Get the section name (e.g., "discord").
    pub fn section(&self) -> &'static str {
        self.name().split('.').next().unwrap_or("")
    }

    /// Get the key name within the section (e.g., "channel_id").
    pub fn key_name(&self) -> &'static str {
        self.name().split('.').nth(1).unwrap_or(self.name())
    }

    /// Returns true for values that should not be echoed in full.
    pub fn is_secret(&self) -> bool {
        matches!(self, ConfigKey::DiscordToken)
    }

    /// Get the value from a config file as a string.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::FeedUrl => config.feed.url.clone(),
            ConfigKey::FeedTimeoutSecs => config.feed.timeout_secs.to_string(),
            ConfigKey::RegistryPrimary => path_to_string(&config.registry.primary),
            ConfigKey::RegistryOverrides => path_to_string(&config.registry.overrides),
            ConfigKey::DiscordToken => config.discord.token.clone().unwrap_or_default(),
            ConfigKey::DiscordChannelId => config
                .discord
                .channel_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            ConfigKey::DiscordApiBase => config.discord.api_base.clone(),
            ConfigKey::ScheduleIntervalSecs => config.schedule.interval_secs.to_string(),
            ConfigKey::ReportMaxFields => config.report.max_fields.to_string(),
            ConfigKey::LoggingFile => path_to_string(&config.logging.file),
        }
    }

    /// Set the value in a config file.
    ///
    /// Validates the value according to the key's specification before setting.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigKeyError> {
        let value = value.trim();
        self.validate(value)?;

        match self {
            ConfigKey::FeedUrl => config.feed.url = value.to_string(),
            ConfigKey::FeedTimeoutSecs => config.feed.timeout_secs = self.number(value)?,
            ConfigKey::RegistryPrimary => config.registry.primary = expand_tilde(value),
            ConfigKey::RegistryOverrides => config.registry.overrides = expand_tilde(value),
            ConfigKey::DiscordToken => {
                config.discord.token = (!value.is_empty()).then(|| value.to_string());
            }
            ConfigKey::DiscordChannelId => {
                config.discord.channel_id = if value.is_empty() {
                    None
                } else {
                    Some(self.number(value)?)
                };
            }
            ConfigKey::DiscordApiBase => config.discord.api_base = value.to_string(),
            ConfigKey::ScheduleIntervalSecs => {
                config.schedule.interval_secs = self.number(value)?;
            }
            ConfigKey::ReportMaxFields => {
                config.report.max_fields = clamp_max_fields(self.number(value)?);
            }
            ConfigKey::LoggingFile => config.logging.file = expand_tilde(value),
        }
        Ok(())
    }

    /// Validate a value according to this key's specification.
    pub fn validate(&self, value: &str) -> Result<(), ConfigKeyError> {
        self.specification()
            .is_satisfied_by(value)
            .map_err(|reason| ConfigKeyError::ValidationFailed {
                key: self.name().to_string(),
                reason,
            })
    }

    fn number<T: FromStr>(&self, value: &str) -> Result<T, ConfigKeyError> {
        value.parse().map_err(|_| ConfigKeyError::ValidationFailed {
            key: self.name().to_string(),
            reason: "must be a number".to_string(),
        })
    }

    /// Get the validation specification for this key.
    fn specification(&self) -> Box<dyn ValueSpecification> {
        match self {
            ConfigKey::FeedUrl => Box::new(UrlSpec),
            ConfigKey::FeedTimeoutSecs => Box::new(PositiveIntegerSpec),
            ConfigKey::RegistryPrimary => Box::new(PathSpec),
            ConfigKey::RegistryOverrides => Box::new(PathSpec),
            ConfigKey::DiscordToken => Box::new(AnyStringSpec),
            ConfigKey::DiscordChannelId => Box::new(OptionalIntegerSpec),
            ConfigKey::DiscordApiBase => Box::new(UrlSpec),
            ConfigKey::ScheduleIntervalSecs => Box::new(PositiveIntegerSpec),
            ConfigKey::ReportMaxFields => Box::new(PositiveIntegerSpec),
            ConfigKey::LoggingFile => Box::new(PathSpec),
        }
    }

    /// Get all supported configuration keys.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::FeedUrl,
            ConfigKey::FeedTimeoutSecs,
            ConfigKey::RegistryPrimary,
            ConfigKey::RegistryOverrides,
            ConfigKey::DiscordToken,
            ConfigKey::DiscordChannelId,
            ConfigKey::DiscordApiBase,
            ConfigKey::ScheduleIntervalSecs,
            ConfigKey::ReportMaxFields,
            ConfigKey::LoggingFile,
        ]
    }
}

// ============================================================================
// Value Specifications
// ============================================================================

/// Trait for value validation specifications.
trait ValueSpecification {
    /// Returns Ok(()) if valid, Err(reason) if invalid.
    fn is_satisfied_by(&self, value: &str) -> Result<(), String>;
}

struct AnyStringSpec;

impl ValueSpecification for AnyStringSpec {
    fn is_satisfied_by(&self, _value: &str) -> Result<(), String> {
        Ok(())
    }
}

/// Integer greater than zero.
struct PositiveIntegerSpec;

impl ValueSpecification for PositiveIntegerSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        match value.parse::<u64>() {
            Ok(n) if n > 0 => Ok(()),
            _ => Err("must be a positive integer".to_string()),
        }
    }
}

/// Empty, or an unsigned integer.
struct OptionalIntegerSpec;

impl ValueSpecification for OptionalIntegerSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        if value.is_empty() || value.parse::<u64>().is_ok() {
            Ok(())
        } else {
            Err("must be a numeric id".to_string())
        }
    }
}

/// Non-empty path.
struct PathSpec;

impl ValueSpecification for PathSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            Err("must be a valid path".to_string())
        } else {
            Ok(())
        }
    }
}

struct UrlSpec;

impl ValueSpecification for UrlSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        if value.starts_with("http://") || value.starts_with("https://") {
            Ok(())
        } else {
            Err("must be a URL starting with 'http://' or 'https://'".to_string())
        }
    }
}
