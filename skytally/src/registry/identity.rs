//! Identity records and the hex-keyed [`Registry`] map.

use std::collections::HashMap;

/// Aircraft type label used when no registry provides one.
pub const UNKNOWN_TYPE: &str = "unknown";

/// Normalize a hex identifier to its registry key form (trimmed, lowercase).
pub fn normalize_hex(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// Best-known identity of a single aircraft.
///
/// Produced once when a registry is loaded and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Registration mark (e.g. "N100", "D-AIBL"). May be empty.
    pub registration: String,
    /// Aircraft type (e.g. "A320", "Cessna"). Never empty.
    pub aircraft_type: String,
    /// Operator name. May be empty.
    pub operator: String,
}

impl Identity {
    /// Create an identity, substituting [`UNKNOWN_TYPE`] for a blank type.
    pub fn new(
        registration: impl Into<String>,
        aircraft_type: impl Into<String>,
        operator: impl Into<String>,
    ) -> Self {
        let aircraft_type = aircraft_type.into();
        let aircraft_type = if aircraft_type.trim().is_empty() {
            UNKNOWN_TYPE.to_string()
        } else {
            aircraft_type
        };

        Self {
            registration: registration.into(),
            aircraft_type,
            operator: operator.into(),
        }
    }

    /// The identity used for aircraft that appear in no registry.
    pub fn unknown() -> Self {
        Self::new("", UNKNOWN_TYPE, "")
    }

    /// Returns true if this identity carries a non-blank registration.
    pub fn has_registration(&self) -> bool {
        !self.registration.trim().is_empty()
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Mapping from normalized hex identifier to [`Identity`].
///
/// Keys are always stored in [`normalize_hex`] form and lookups normalize
/// their argument, so callers may pass hex in any case.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: HashMap<String, Identity>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert only if the hex is not yet present (first occurrence wins).
    ///
    /// Returns true if the entry was inserted. Blank hex keys are rejected.
    pub fn insert_if_absent(&mut self, hex: &str, identity: Identity) -> bool {
        let key = normalize_hex(hex);
        if key.is_empty() || self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, identity);
        true
    }

    /// Insert, replacing any previous entry (last occurrence wins).
    ///
    /// Returns false only for a blank hex key.
    pub fn insert(&mut self, hex: &str, identity: Identity) -> bool {
        let key = normalize_hex(hex);
        if key.is_empty() {
            return false;
        }
        self.entries.insert(key, identity);
        true
    }

    /// Look up an identity by hex identifier.
    pub fn get(&self, hex: &str) -> Option<&Identity> {
        self.entries.get(&normalize_hex(hex))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
