//! CSV loaders for the primary and override registries.
//!
//! Both loaders skip the header row and tolerate malformed rows: a row that is
//! too short, fails to decode, or has a blank hex is skipped and counted in
//! [`LoadStats::skipped`]. Only I/O failures abort a load.
//!
//! # Primary format
//!
//! An aircraft database export with values optionally wrapped in single
//! quotes, e.g. `'4ca7b3','...',...`. Columns are addressed by index via
//! [`PrimaryLayout`]. The first row for a given hex wins.
//!
//! # Override format
//!
//! A four-column file: `hex,registration,type,operator`. The last row for a
//! given hex wins, so later lines correct earlier ones. The file is optional.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use super::error::RegistryError;
use super::identity::{Identity, Registry};
use super::resolver::IdentityResolver;

/// Minimum column count for an override row.
const OVERRIDE_MIN_COLUMNS: usize = 4;

/// Row counts from a registry load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Rows that produced a registry entry.
    pub loaded: usize,
    /// Rows that were malformed, too short, or lost to an earlier duplicate.
    pub skipped: usize,
}

/// Column positions in the primary registry export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimaryLayout {
    pub hex: usize,
    pub operator: usize,
    pub registration: usize,
    pub aircraft_type: usize,
    /// Rows with fewer columns than this are skipped.
    pub min_columns: usize,
}

impl Default for PrimaryLayout {
    fn default() -> Self {
        Self {
            hex: 0,
            operator: 18,
            registration: 27,
            aircraft_type: 30,
            min_columns: 31,
        }
    }
}

/// Load the primary registry from a CSV file.
pub fn load_primary(path: &Path) -> Result<Registry, RegistryError> {
    let file = File::open(path).map_err(|source| RegistryError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let (registry, stats) = read_primary(file, PrimaryLayout::default())?;

    tracing::info!(
        path = %path.display(),
        aircraft = stats.loaded,
        skipped = stats.skipped,
        "Primary registry loaded"
    );

    Ok(registry)
}

/// Read a primary registry from any reader.
pub fn read_primary<R: Read>(
    reader: R,
    layout: PrimaryLayout,
) -> Result<(Registry, LoadStats), RegistryError> {
    let mut csv = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quote(b'\'')
        .trim(Trim::All)
        .from_reader(reader);

    let mut registry = Registry::new();
    let mut stats = LoadStats::default();

    for result in csv.records() {
        let Some(record) = usable_record(result, layout.min_columns)? else {
            stats.skipped += 1;
            continue;
        };

        let hex = unquote(field(&record, layout.hex));
        let identity = Identity::new(
            unquote(field(&record, layout.registration)),
            unquote(field(&record, layout.aircraft_type)),
            unquote(field(&record, layout.operator)),
        );

        if registry.insert_if_absent(hex, identity) {
            stats.loaded += 1;
        } else {
            stats.skipped += 1;
        }
    }

    Ok((registry, stats))
}

/// Load the override registry from a CSV file.
///
/// A missing file is not an error: a warning is logged and an empty
/// registry returned.
pub fn load_overrides(path: &Path) -> Result<Registry, RegistryError> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "Override registry missing, skipping");
        return Ok(Registry::new());
    }

    let file = File::open(path).map_err(|source| RegistryError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let (registry, stats) = read_overrides(file)?;

    tracing::info!(
        path = %path.display(),
        overrides = stats.loaded,
        skipped = stats.skipped,
        "Override registry loaded"
    );

    Ok(registry)
}

/// Read an override registry from any reader.
///
/// `loaded` counts accepted rows, so a hex corrected twice counts twice even
/// though the registry holds one entry for it.
pub fn read_overrides<R: Read>(reader: R) -> Result<(Registry, LoadStats), RegistryError> {
    let mut csv = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut registry = Registry::new();
    let mut stats = LoadStats::default();

    for result in csv.records() {
        let Some(record) = usable_record(result, OVERRIDE_MIN_COLUMNS)? else {
            stats.skipped += 1;
            continue;
        };

        let identity = Identity::new(field(&record, 1), field(&record, 2), field(&record, 3));

        if registry.insert(field(&record, 0), identity) {
            stats.loaded += 1;
        } else {
            stats.skipped += 1;
        }
    }

    Ok((registry, stats))
}

/// Load both registries and build a resolver.
pub fn load_resolver(primary: &Path, overrides: &Path) -> Result<IdentityResolver, RegistryError> {
    let primary = load_primary(primary)?;
    let overrides = load_overrides(overrides)?;
    Ok(IdentityResolver::new(primary, overrides))
}

/// Filter a CSV read result down to rows worth parsing.
///
/// I/O errors propagate; decode errors and short rows yield `None`.
fn usable_record(
    result: Result<StringRecord, csv::Error>,
    min_columns: usize,
) -> Result<Option<StringRecord>, RegistryError> {
    match result {
        Ok(record) if record.len() >= min_columns => Ok(Some(record)),
        Ok(record) => {
            tracing::trace!(columns = record.len(), min_columns, "Skipping short registry row");
            Ok(None)
        }
        Err(e) if e.is_io_error() => Err(RegistryError::Read(e)),
        Err(e) => {
            tracing::trace!(error = %e, "Skipping malformed registry row");
            Ok(None)
        }
    }
}

fn field(record: &StringRecord, index: usize) -> &str {
    record.get(index).unwrap_or("")
}

/// Strip stray single quotes left around a value.
fn unquote(value: &str) -> &str {
    value.trim().trim_matches('\'').trim()
}
