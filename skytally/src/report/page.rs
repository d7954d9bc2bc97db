//! Report page types.

use std::fmt;

use chrono::{DateTime, Utc};

/// Header repeated on every page of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportHeader {
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

impl ReportHeader {
    /// Build the standard header for a report rendered at `timestamp`.
    ///
    /// `top_type` is the label of the largest group, or "None".
    pub fn new(timestamp: DateTime<Utc>, unique_count: usize, top_type: &str) -> Self {
        Self {
            title: format!("✈️ Aircraft Seen — {} UTC", timestamp.format("%Y-%m-%d")),
            description: format!(
                "Unique aircraft today: {}\nMost common type: {}",
                unique_count, top_type
            ),
            timestamp,
        }
    }
}

/// One labelled field: an aircraft type and its aircraft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportField {
    /// `"{type} ({count})"`.
    pub name: String,
    /// One `"<callsign> (<registration>)"` line per aircraft.
    pub value: String,
}

/// The unit of content sent to, or edited on, the notification channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPage {
    pub header: ReportHeader,
    pub fields: Vec<ReportField>,
}

impl ReportPage {
    /// An empty page with the given header.
    pub fn new(header: ReportHeader) -> Self {
        Self {
            header,
            fields: Vec::new(),
        }
    }

    /// Number of fields on the page.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

impl fmt::Display for ReportPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header.title)?;
        writeln!(f, "{}", self.header.description)?;
        for field in &self.fields {
            writeln!(f)?;
            writeln!(f, "{}", field.name)?;
            for line in field.value.lines() {
                writeln!(f, "  {}", line)?;
            }
        }
        Ok(())
    }
}
