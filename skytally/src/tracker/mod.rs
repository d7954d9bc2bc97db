//! Day-scoped sighting state.
//!
//! - [`sighting`] - `SightingTracker`: per-hex state for today plus the
//!   unique-today set, with the display-name update policy
//! - [`day`] - `DayState`: everything that resets at UTC midnight, and the
//!   rollover check that replaces it wholesale
//!
//! All of this state is owned by the poll cycle. Nothing else writes to it, so
//! it uses plain collections rather than concurrent maps.

mod day;
mod sighting;

pub use day::DayState;
pub use sighting::{display_name, ObserveEvent, SeenAircraft, SightingTracker};
