//! Lookup command - resolve one hex identifier against the registries.

use skytally::registry::{normalize_hex, IdentitySource};
use skytally::service;

use crate::error::CliError;
use crate::runner::CliRunner;

pub fn run(hex: &str, debug: bool) -> Result<(), CliError> {
    let runner = CliRunner::new(debug, false)?;
    let resolver = service::create_resolver(runner.config())?;

    let hex = normalize_hex(hex);
    if hex.is_empty() {
        return Err(CliError::Config("hex identifier must not be empty".to_string()));
    }

    let resolved = resolver.resolve(&hex);
    let identity = &resolved.identity;

    println!("Hex:          {}", hex);
    println!("Registration: {}", or_dash(&identity.registration));
    println!("Type:         {}", identity.aircraft_type);
    println!("Operator:     {}", or_dash(&identity.operator));
    println!("Source:       {}", resolved.source);

    if resolved.source == IdentitySource::Unknown {
        println!();
        println!("Not found in either registry. Add it to the overrides file:");
        println!("  {}", runner.config().registry.overrides.display());
    }

    Ok(())
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}
