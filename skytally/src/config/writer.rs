//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! Produces the commented INI representation written to `config.ini`.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let token = config.discord.token.as_deref().unwrap_or("");
    let channel_id = config
        .discord
        .channel_id
        .map(|id| id.to_string())
        .unwrap_or_default();

    format!(
        r#"[feed]
; dump1090 / readsb / tar1090 aircraft.json endpoint
url = {}
; HTTP timeout for one fetch, in seconds
timeout_secs = {}

[registry]
; Primary aircraft database CSV (OpenSky aircraftDatabase layout)
primary = {}
; Hand-maintained overrides: hex,registration,type,operator
; Entries here take precedence over the primary database. Optional.
overrides = {}

[discord]
; Bot token (Developer Portal > Bot > Token)
token = {}
; Channel the daily report is posted to
channel_id = {}
; REST API root
api_base = {}

[schedule]
; Delay after each poll cycle, in seconds (default: 180)
interval_secs = {}

[report]
; Aircraft types per message, 1 to 25 (Discord embed field limit)
max_fields = {}

[logging]
; Log file, cleared at startup
file = {}
"#,
        config.feed.url,
        config.feed.timeout_secs,
        path_to_string(&config.registry.primary),
        path_to_string(&config.registry.overrides),
        token,
        channel_id,
        config.discord.api_base,
        config.schedule.interval_secs,
        config.report.max_fields,
        path_to_string(&config.logging.file),
    )
}

/// Convert path to string, collapsing home dir to ~.
pub(super) fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
