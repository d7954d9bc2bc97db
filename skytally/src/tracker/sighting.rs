//! Sighting tracker with the anti-flicker display name policy.
//!
//! # Display name
//!
//! Preference order: non-blank flight callsign, then non-blank registration,
//! then the raw hex identifier.
//!
//! # Update policy
//!
//! | Situation                                 | Effect                        | Event                  |
//! |-------------------------------------------|-------------------------------|------------------------|
//! | hex not seen today                        | insert, add to unique set     | `Created`              |
//! | seen, callsign blank this poll            | keep stored name              | `IgnoredStaleCallsign` |
//! | seen, display name differs                | overwrite stored name         | `Updated`              |
//! | seen, display name identical              | nothing                       | `Unchanged`            |
//!
//! Feeds routinely drop the `flight` field for a poll or two. Without the
//! second rule the report would flip between callsign and registration.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::registry::{normalize_hex, Identity};

/// Pick the label shown for an aircraft.
pub fn display_name<'a>(flight: &'a str, registration: &'a str, hex: &'a str) -> &'a str {
    if !flight.trim().is_empty() {
        flight.trim()
    } else if !registration.trim().is_empty() {
        registration.trim()
    } else {
        hex
    }
}

/// An aircraft seen during the current UTC day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeenAircraft {
    /// Normalized hex identifier.
    pub hex: String,
    /// Registration, or the hex when no registry knew one.
    pub registration: String,
    /// Aircraft type from the resolved identity.
    pub aircraft_type: String,
    /// Current display name (callsign, registration or hex).
    pub callsign: String,
}

impl SeenAircraft {
    /// Report line for this aircraft: `"<callsign> (<registration-or-hex>)"`.
    pub fn report_line(&self) -> String {
        let registration = if self.registration.trim().is_empty() {
            &self.hex
        } else {
            &self.registration
        };
        format!("{} ({})", self.callsign, registration)
    }
}

/// Outcome of [`SightingTracker::observe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserveEvent {
    /// First sighting of this hex today.
    Created,
    /// The stored display name changed.
    Updated,
    /// The feed dropped the callsign; the stored name was kept.
    IgnoredStaleCallsign,
    /// Re-observation with nothing new.
    Unchanged,
}

/// Aircraft seen today, keyed by hex, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct SightingTracker {
    seen: IndexMap<String, SeenAircraft>,
    unique_today: HashSet<String>,
}

impl SightingTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one feed observation.
    pub fn observe(&mut self, hex: &str, flight: &str, identity: &Identity) -> ObserveEvent {
        let hex = normalize_hex(hex);
        let name = display_name(flight, &identity.registration, &hex);

        if let Some(seen) = self.seen.get_mut(&hex) {
            if flight.trim().is_empty() {
                return ObserveEvent::IgnoredStaleCallsign;
            }
            if seen.callsign != name {
                seen.callsign = name.to_string();
                return ObserveEvent::Updated;
            }
            return ObserveEvent::Unchanged;
        }

        let registration = if identity.has_registration() {
            identity.registration.clone()
        } else {
            hex.clone()
        };

        let aircraft = SeenAircraft {
            hex: hex.clone(),
            registration,
            aircraft_type: identity.aircraft_type.clone(),
            callsign: name.to_string(),
        };

        self.unique_today.insert(hex.clone());
        self.seen.insert(hex, aircraft);
        ObserveEvent::Created
    }

    /// Look up an aircraft seen today.
    pub fn get(&self, hex: &str) -> Option<&SeenAircraft> {
        self.seen.get(&normalize_hex(hex))
    }

    /// Aircraft seen today, in first-seen order.
    pub fn aircraft(&self) -> impl Iterator<Item = &SeenAircraft> {
        self.seen.values()
    }

    /// Number of distinct hex identifiers seen today.
    pub fn unique_count(&self) -> usize {
        self.unique_today.len()
    }

    /// Returns true if the hex has been seen today.
    pub fn has_seen(&self, hex: &str) -> bool {
        self.unique_today.contains(&normalize_hex(hex))
    }

    /// Number of tracked aircraft.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns true if nothing has been seen today.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
