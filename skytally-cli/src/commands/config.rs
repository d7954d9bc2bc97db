//! Configuration management CLI commands.
//!
//! Provides `config get`, `config set`, `config list`, `config path` and
//! `config init` for viewing and modifying settings from the command line.

use clap::Subcommand;
use skytally::config::{config_file_path, ConfigFile, ConfigKey};

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Get a configuration value
    Get {
        /// Configuration key in format section.key (e.g., discord.channel_id)
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key in format section.key (e.g., discord.channel_id)
        key: String,

        /// Value to set (empty string clears optional values)
        value: String,
    },

    /// List all configuration settings
    List,

    /// Show the configuration file path
    Path,

    /// Create the configuration file with defaults if it does not exist
    Init,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Get { key } => run_get(&key),
        ConfigCommands::Set { key, value } => run_set(&key, &value),
        ConfigCommands::List => run_list(),
        ConfigCommands::Path => run_path(),
        ConfigCommands::Init => run_init(),
    }
}

fn parse_key(key: &str) -> Result<ConfigKey, CliError> {
    key.parse().map_err(|_| {
        CliError::Config(format!(
            "Unknown configuration key '{}'. Use 'skytally config list' to see available keys.",
            key
        ))
    })
}

/// How a value is shown to the user; secrets never are.
fn display_value(key: ConfigKey, config: &ConfigFile) -> String {
    let value = key.get(config);
    match (value.is_empty(), key.is_secret()) {
        (true, _) => "(not set)".to_string(),
        (false, true) => "(hidden)".to_string(),
        (false, false) => value,
    }
}

fn run_get(key: &str) -> Result<(), CliError> {
    let config_key = parse_key(key)?;
    let config = ConfigFile::load()?;

    // `get` is explicit, so a secret is printed in full.
    let value = config_key.get(&config);
    println!("{}", if value.is_empty() { "(not set)" } else { value.as_str() });

    Ok(())
}

fn run_set(key: &str, value: &str) -> Result<(), CliError> {
    let config_key = parse_key(key)?;

    let mut config = ConfigFile::load()?;
    config_key
        .set(&mut config, value)
        .map_err(|e| CliError::Config(e.to_string()))?;
    config.save()?;

    println!("{} = {}", config_key.name(), display_value(config_key, &config));
    Ok(())
}

/// Print every key grouped under its INI section.
fn run_list() -> Result<(), CliError> {
    let config = ConfigFile::load()?;
    println!("{}", config_file_path().display());

    let width = ConfigKey::all()
        .iter()
        .map(|key| key.key_name().len())
        .max()
        .unwrap_or(0);

    let mut section = None;
    for &key in ConfigKey::all() {
        if section != Some(key.section()) {
            section = Some(key.section());
            println!();
            println!("[{}]", key.section());
        }
        println!(
            "  {:<width$} = {}",
            key.key_name(),
            display_value(key, &config),
            width = width
        );
    }

    Ok(())
}

/// Show the configuration file path.
fn run_path() -> Result<(), CliError> {
    println!("{}", config_file_path().display());
    Ok(())
}

/// Write a default configuration file.
fn run_init() -> Result<(), CliError> {
    let existed = config_file_path().exists();
    let path = ConfigFile::ensure_exists()?;

    if existed {
        println!("Configuration already exists at {}", path.display());
    } else {
        println!("Created {}", path.display());
        println!();
        println!("Next steps:");
        println!("  skytally config set discord.token <bot token>");
        println!("  skytally config set discord.channel_id <channel id>");
        println!("  skytally config set registry.primary /path/to/aircraftDatabase.csv");
    }

    Ok(())
}
