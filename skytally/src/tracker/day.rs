//! Day window: state that lives for one UTC day.

use chrono::{DateTime, NaiveDate, Utc};

use super::sighting::SightingTracker;
use crate::notify::MessageHistory;

/// Everything that is cleared at UTC midnight.
///
/// Owned by the poll cycle and passed by reference into each stage. On
/// rollover the whole value is replaced, so the sightings, the unique-today
/// set and the message history can never disagree about which day they
/// belong to.
#[derive(Debug, Clone)]
pub struct DayState {
    date: NaiveDate,
    tracker: SightingTracker,
    messages: MessageHistory,
}

impl DayState {
    /// Fresh state for the given UTC date.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            tracker: SightingTracker::new(),
            messages: MessageHistory::new(),
        }
    }

    /// Fresh state for the date of `now`.
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self::new(now.date_naive())
    }

    /// Reset if `now` falls on a later UTC date than the tracked one.
    ///
    /// Returns true if a reset occurred. A clock stepping backwards never
    /// resets.
    pub fn check_rollover(&mut self, now: DateTime<Utc>) -> bool {
        let today = now.date_naive();
        if today <= self.date {
            return false;
        }

        let previous = self.date;
        *self = Self::new(today);

        tracing::info!(
            previous = %previous,
            date = %today,
            "Day rolled over, counters cleared"
        );
        true
    }

    /// The UTC date this state applies to.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn tracker(&self) -> &SightingTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut SightingTracker {
        &mut self.tracker
    }

    pub fn messages(&self) -> &MessageHistory {
        &self.messages
    }

    pub fn messages_mut(&mut self) -> &mut MessageHistory {
        &mut self.messages
    }
}
