//! Summary report rendering.
//!
//! Groups today's sightings by aircraft type, ranks the groups by size and
//! paginates them into [`ReportPage`]s of at most [`MAX_FIELDS_PER_PAGE`]
//! fields, one field per type. Every page repeats the same header.
//!
//! Output is deterministic for a given tracker state: groups of equal size
//! keep the order in which their first member was seen today.

mod builder;
mod page;

pub use builder::{rank_groups, ReportBuilder, TypeGroup, MAX_FIELDS_PER_PAGE};
pub use page::{ReportField, ReportHeader, ReportPage};
