//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::defaults::clamp_max_fields;
use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [feed] section
    if let Some(section) = ini.section(Some("feed")) {
        if let Some(v) = section.get("url") {
            config.feed.url = parse_url("feed", "url", v)?;
        }
        if let Some(v) = section.get("timeout_secs") {
            config.feed.timeout_secs = parse_positive("feed", "timeout_secs", v)?;
        }
    }

    // [registry] section
    if let Some(section) = ini.section(Some("registry")) {
        if let Some(v) = section.get("primary") {
            let v = v.trim();
            if !v.is_empty() {
                config.registry.primary = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("overrides") {
            let v = v.trim();
            if !v.is_empty() {
                config.registry.overrides = expand_tilde(v);
            }
        }
    }

    // [discord] section
    if let Some(section) = ini.section(Some("discord")) {
        if let Some(v) = section.get("token") {
            let v = v.trim();
            if !v.is_empty() {
                config.discord.token = Some(v.to_string());
            }
        }
        if let Some(v) = section.get("channel_id") {
            let v = v.trim();
            if !v.is_empty() {
                config.discord.channel_id =
                    Some(v.parse().map_err(|_| ConfigFileError::InvalidValue {
                        section: "discord".to_string(),
                        key: "channel_id".to_string(),
                        value: v.to_string(),
                        reason: "must be a numeric channel id".to_string(),
                    })?);
            }
        }
        if let Some(v) = section.get("api_base") {
            config.discord.api_base = parse_url("discord", "api_base", v)?;
        }
    }

    // [schedule] section
    if let Some(section) = ini.section(Some("schedule")) {
        if let Some(v) = section.get("interval_secs") {
            config.schedule.interval_secs = parse_positive("schedule", "interval_secs", v)?;
        }
    }

    // [report] section
    if let Some(section) = ini.section(Some("report")) {
        if let Some(v) = section.get("max_fields") {
            let requested = v.trim().parse().map_err(|_| ConfigFileError::InvalidValue {
                section: "report".to_string(),
                key: "max_fields".to_string(),
                value: v.to_string(),
                reason: "must be an integer between 1 and 25".to_string(),
            })?;
            config.report.max_fields = clamp_max_fields(requested);
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    Ok(config)
}

fn parse_url(section: &str, key: &str, value: &str) -> Result<String, ConfigFileError> {
    let value = value.trim();
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(value.to_string())
    } else {
        Err(ConfigFileError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            reason: "must be a URL starting with 'http://' or 'https://'".to_string(),
        })
    }
}

fn parse_positive(section: &str, key: &str, value: &str) -> Result<u64, ConfigFileError> {
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigFileError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            reason: "must be a positive integer (seconds)".to_string(),
        }),
    }
}

/// Expand ~ to home directory in paths.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
