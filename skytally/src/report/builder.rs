//! Grouping, ranking and pagination.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use super::page::{ReportField, ReportHeader, ReportPage};
use crate::tracker::{SeenAircraft, SightingTracker};

/// Maximum fields per page (Discord's embed field limit).
pub const MAX_FIELDS_PER_PAGE: usize = 25;

/// Aircraft sharing a type, in first-seen order.
#[derive(Debug, Clone)]
pub struct TypeGroup<'a> {
    pub aircraft_type: &'a str,
    pub members: Vec<&'a SeenAircraft>,
}

impl TypeGroup<'_> {
    /// `"{type} ({count})"`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.aircraft_type, self.members.len())
    }

    fn to_field(&self) -> ReportField {
        let value = self
            .members
            .iter()
            .map(|aircraft| aircraft.report_line())
            .collect::<Vec<_>>()
            .join("\n");

        ReportField {
            name: self.label(),
            value,
        }
    }
}

/// Group aircraft by type and order groups by descending size.
///
/// Groups are created in the order their first member appears, and the sort
/// is stable, so equal-sized groups keep that order.
pub fn rank_groups<'a, I>(aircraft: I) -> Vec<TypeGroup<'a>>
where
    I: IntoIterator<Item = &'a SeenAircraft>,
{
    let mut by_type: IndexMap<&'a str, Vec<&'a SeenAircraft>> = IndexMap::new();
    for seen in aircraft {
        by_type
            .entry(seen.aircraft_type.as_str())
            .or_default()
            .push(seen);
    }

    let mut groups: Vec<TypeGroup<'a>> = by_type
        .into_iter()
        .map(|(aircraft_type, members)| TypeGroup {
            aircraft_type,
            members,
        })
        .collect();

    groups.sort_by(|a, b| b.members.len().cmp(&a.members.len()));
    groups
}

/// Renders sightings into report pages.
#[derive(Debug, Clone, Copy)]
pub struct ReportBuilder {
    max_fields: usize,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self {
            max_fields: MAX_FIELDS_PER_PAGE,
        }
    }
}

impl ReportBuilder {
    /// Builder with the standard 25-field page capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-page field capacity, clamped to `1..=MAX_FIELDS_PER_PAGE`.
    pub fn with_max_fields(mut self, max_fields: usize) -> Self {
        self.max_fields = max_fields.clamp(1, MAX_FIELDS_PER_PAGE);
        self
    }

    /// Per-page field capacity.
    pub fn max_fields(&self) -> usize {
        self.max_fields
    }

    /// Build pages for everything in the tracker.
    pub fn build_for(&self, tracker: &SightingTracker, timestamp: DateTime<Utc>) -> Vec<ReportPage> {
        self.build(tracker.aircraft(), tracker.unique_count(), timestamp)
    }

    /// Build pages from a set of sightings.
    ///
    /// Always returns at least one page. With no sightings the single page
    /// has a header and no fields; otherwise no page is ever empty.
    pub fn build<'a, I>(
        &self,
        aircraft: I,
        unique_count: usize,
        timestamp: DateTime<Utc>,
    ) -> Vec<ReportPage>
    where
        I: IntoIterator<Item = &'a SeenAircraft>,
    {
        let groups = rank_groups(aircraft);

        let top_type = groups
            .first()
            .map(TypeGroup::label)
            .unwrap_or_else(|| "None".to_string());
        let header = ReportHeader::new(timestamp, unique_count, &top_type);

        let mut pages = Vec::new();
        let mut current = ReportPage::new(header.clone());

        for group in &groups {
            if current.fields.len() >= self.max_fields {
                let full = std::mem::replace(&mut current, ReportPage::new(header.clone()));
                pages.push(full);
            }
            current.fields.push(group.to_field());
        }

        if !current.fields.is_empty() || pages.is_empty() {
            pages.push(current);
        }

        pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap()
    }

    fn seen(hex: &str, aircraft_type: &str) -> SeenAircraft {
        SeenAircraft {
            hex: hex.to_string(),
            registration: hex.to_uppercase(),
            aircraft_type: aircraft_type.to_string(),
            callsign: format!("CS{}", hex),
        }
    }

    #[test]
    fn test_empty_yields_single_header_page() {
        let pages = ReportBuilder::new().build(std::iter::empty(), 0, ts());

        assert_eq!(pages.len(), 1);
        assert!(pages[0].fields.is_empty());
        assert_eq!(
            pages[0].header.description,
            "Unique aircraft today: 0\nMost common type: None"
        );
    }

    #[test]
    fn test_groups_ranked_by_size() {
        let aircraft = vec![
            seen("a1", "Cessna"),
            seen("b1", "A320"),
            seen("b2", "A320"),
            seen("c1", "B738"),
            seen("b3", "A320"),
            seen("c2", "B738"),
        ];
        let pages = ReportBuilder::new().build(&aircraft, 6, ts());

        assert_eq!(pages.len(), 1);
        let names: Vec<&str> = pages[0].fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["A320 (3)", "B738 (2)", "Cessna (1)"]);
        assert_eq!(pages[0].fields[0].value, "CSb1 (B1)\nCSb2 (B2)\nCSb3 (B3)");
        assert!(pages[0].header.description.ends_with("Most common type: A320 (3)"));
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let aircraft = vec![
            seen("x1", "Piper"),
            seen("y1", "Cessna"),
            seen("z1", "A320"),
            seen("z2", "A320"),
        ];
        let groups = rank_groups(&aircraft);
        let order: Vec<&str> = groups.iter().map(|g| g.aircraft_type).collect();
        assert_eq!(order, vec!["A320", "Piper", "Cessna"]);
    }

    #[test]
    fn test_thirty_groups_make_two_pages() {
        let aircraft: Vec<SeenAircraft> = (0..30)
            .map(|i| seen(&format!("h{:02}", i), &format!("Type{:02}", i)))
            .collect();
        let pages = ReportBuilder::new().build(&aircraft, 30, ts());

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].fields.len(), 25);
        assert_eq!(pages[1].fields.len(), 5);
        assert_eq!(pages[0].header, pages[1].header);
        assert_eq!(pages[1].fields[0].name, "Type25 (1)");
    }

    #[test]
    fn test_exactly_full_page_has_no_trailing_empty_page() {
        let aircraft: Vec<SeenAircraft> = (0..25)
            .map(|i| seen(&format!("h{:02}", i), &format!("Type{:02}", i)))
            .collect();
        let pages = ReportBuilder::new().build(&aircraft, 25, ts());

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].fields.len(), 25);
    }

    #[test]
    fn test_custom_capacity() {
        let aircraft: Vec<SeenAircraft> = (0..7)
            .map(|i| seen(&format!("h{}", i), &format!("T{}", i)))
            .collect();
        let pages = ReportBuilder::new().with_max_fields(3).build(&aircraft, 7, ts());

        let sizes: Vec<usize> = pages.iter().map(ReportPage::field_count).collect();
        assert_eq!(sizes, vec![3, 3, 1]);
    }

    #[test]
    fn test_capacity_clamped() {
        assert_eq!(ReportBuilder::new().with_max_fields(0).max_fields(), 1);
        assert_eq!(ReportBuilder::new().with_max_fields(100).max_fields(), 25);
    }

    #[test]
    fn test_build_is_deterministic() {
        let aircraft: Vec<SeenAircraft> = (0..40)
            .map(|i| seen(&format!("h{:02}", i), &format!("T{}", i % 7)))
            .collect();
        let builder = ReportBuilder::new().with_max_fields(4);

        assert_eq!(builder.build(&aircraft, 40, ts()), builder.build(&aircraft, 40, ts()));
    }

    #[test]
    fn test_build_for_tracker() {
        use crate::registry::Identity;

        let mut tracker = SightingTracker::new();
        tracker.observe("abc123", "", &Identity::new("N100", "Cessna", ""));
        let pages = ReportBuilder::new().build_for(&tracker, ts());

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].fields[0].name, "Cessna (1)");
        assert_eq!(pages[0].fields[0].value, "N100 (N100)");
        assert!(pages[0].header.description.starts_with("Unique aircraft today: 1\n"));
    }
}
