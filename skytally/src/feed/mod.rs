//! Live aircraft feed.
//!
//! The feed is pull-based: each poll cycle fetches a snapshot of the aircraft
//! currently being received. [`FeedSource`] abstracts the source so the poll
//! cycle can be driven by a test double; [`Dump1090Client`] reads the
//! `aircraft.json` document served by dump1090 / readsb / tar1090.
//!
//! ```text
//! StatsService (poll cycle)
//!     │
//!     └── FeedSource trait → Dump1090Client (reqwest GET aircraft.json)
//!             │
//!             └── Vec<FeedRecord> { hex, flight }
//! ```

mod client;
mod error;
mod record;

pub use client::{Dump1090Client, FeedSource, DEFAULT_FEED_TIMEOUT, DEFAULT_FEED_URL};
pub use error::FeedError;
pub use record::{parse_snapshot, FeedRecord, Snapshot};
