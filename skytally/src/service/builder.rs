//! Construction of the service's collaborators from configuration.

use super::error::ServiceError;
use crate::config::ConfigFile;
use crate::feed::Dump1090Client;
use crate::notify::{DiscordChannel, DiscordConfig};
use crate::registry::{load_resolver, IdentityResolver};
use crate::report::ReportBuilder;

/// Load both registries.
pub fn create_resolver(config: &ConfigFile) -> Result<IdentityResolver, ServiceError> {
    Ok(load_resolver(
        &config.registry.primary,
        &config.registry.overrides,
    )?)
}

/// Create the dump1090 feed client.
pub fn create_feed(config: &ConfigFile) -> Result<Dump1090Client, ServiceError> {
    Ok(Dump1090Client::new(
        config.feed.url.clone(),
        config.feed.timeout(),
    )?)
}

/// Create the Discord channel.
///
/// Fails with [`ServiceError::MissingSetting`] if the token or channel id is
/// not configured.
pub fn create_discord(config: &ConfigFile) -> Result<DiscordChannel, ServiceError> {
    let token = config
        .discord
        .token
        .clone()
        .ok_or(ServiceError::MissingSetting {
            key: "discord.token",
        })?;
    let channel_id = config
        .discord
        .channel_id
        .ok_or(ServiceError::MissingSetting {
            key: "discord.channel_id",
        })?;

    let mut discord = DiscordConfig::new(token, channel_id);
    discord.api_base = config.discord.api_base.clone();

    Ok(DiscordChannel::new(discord)?)
}

/// Report builder with the configured page capacity.
pub fn create_report_builder(config: &ConfigFile) -> ReportBuilder {
    ReportBuilder::new().with_max_fields(config.report.max_fields)
}
