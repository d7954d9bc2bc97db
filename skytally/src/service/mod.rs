//! The SkyTally service: poll cycle, scheduling and assembly.
//!
//! ```text
//! run_scheduler ── every interval ──► StatsService::run_cycle
//!                                       ├── DayState::check_rollover
//!                                       ├── FeedSource::fetch_snapshot
//!                                       ├── IdentityResolver + SightingTracker
//!                                       ├── ReportBuilder
//!                                       └── sync_pages → NotificationChannel
//! ```

mod builder;
mod cycle;
mod error;
mod scheduler;

pub use builder::{create_discord, create_feed, create_report_builder, create_resolver};
pub use cycle::{CycleSummary, StatsService};
pub use error::ServiceError;
pub use scheduler::{run_scheduler, SchedulerStats};
