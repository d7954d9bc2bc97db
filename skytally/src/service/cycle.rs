//! The poll cycle.

use chrono::{DateTime, NaiveDate, Utc};

use super::error::ServiceError;
use crate::clock::Clock;
use crate::feed::{FeedRecord, FeedSource};
use crate::notify::{sync_pages, NotificationChannel};
use crate::registry::{IdentityResolver, IdentitySource};
use crate::report::{ReportBuilder, ReportPage};
use crate::tracker::{DayState, ObserveEvent};

/// What one cycle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleSummary {
    /// UTC date the cycle was accounted to.
    pub date: NaiveDate,
    /// True if the day rolled over during this cycle.
    pub rolled_over: bool,
    /// Usable feed records.
    pub records: usize,
    /// Feed elements dropped as malformed.
    pub skipped_records: usize,
    pub created: usize,
    pub updated: usize,
    pub ignored: usize,
    /// Pages rendered.
    pub pages: usize,
    pub edited: usize,
    pub sent: usize,
    /// Pages that could not be published.
    pub failures: usize,
}

/// Polls the feed, tracks sightings and keeps the report in sync.
///
/// Owns the day state; nothing else mutates it. One cycle runs at a time
/// because [`run_cycle`](Self::run_cycle) takes `&mut self`.
pub struct StatsService<F, C, K> {
    resolver: IdentityResolver,
    feed: F,
    channel: C,
    clock: K,
    builder: ReportBuilder,
    state: DayState,
}

impl<F, C, K> StatsService<F, C, K>
where
    F: FeedSource,
    C: NotificationChannel,
    K: Clock,
{
    /// Create a service whose day starts at the clock's current date.
    pub fn new(resolver: IdentityResolver, feed: F, channel: C, clock: K) -> Self {
        let state = DayState::starting_at(clock.now_utc());
        Self {
            resolver,
            feed,
            channel,
            clock,
            builder: ReportBuilder::new(),
            state,
        }
    }

    /// Use a custom report builder (page capacity).
    pub fn with_report_builder(mut self, builder: ReportBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// Run one poll cycle.
    ///
    /// The rollover check runs before the fetch and again with the clock
    /// reading taken after it, so a fetch that straddles midnight is
    /// accounted to the new day. If the fetch fails nothing is observed or
    /// published and the error is returned.
    pub async fn run_cycle(&mut self) -> Result<CycleSummary, ServiceError> {
        let mut rolled_over = self.state.check_rollover(self.clock.now_utc());

        let snapshot = self.feed.fetch_snapshot().await?;

        let now = self.clock.now_utc();
        rolled_over |= self.state.check_rollover(now);

        let mut summary = CycleSummary {
            date: self.state.date(),
            rolled_over,
            records: snapshot.records.len(),
            skipped_records: snapshot.skipped,
            created: 0,
            updated: 0,
            ignored: 0,
            pages: 0,
            edited: 0,
            sent: 0,
            failures: 0,
        };

        for record in &snapshot.records {
            match self.observe(record) {
                ObserveEvent::Created => summary.created += 1,
                ObserveEvent::Updated => summary.updated += 1,
                ObserveEvent::IgnoredStaleCallsign => summary.ignored += 1,
                ObserveEvent::Unchanged => {}
            }
        }

        let pages = self.render(now);
        summary.pages = pages.len();

        let sync = sync_pages(&pages, self.state.messages_mut(), &self.channel).await;
        summary.edited = sync.edited;
        summary.sent = sync.sent;
        summary.failures = sync.failures.len();

        tracing::info!(
            date = %self.state.date(),
            aircraft = summary.records,
            unique_today = self.state.tracker().unique_count(),
            new = summary.created,
            pages = summary.pages,
            edited = summary.edited,
            sent = summary.sent,
            failed = summary.failures,
            "Poll cycle complete"
        );

        Ok(summary)
    }

    fn observe(&mut self, record: &FeedRecord) -> ObserveEvent {
        let resolved = self.resolver.resolve(&record.hex);
        let event = self
            .state
            .tracker_mut()
            .observe(&record.hex, &record.flight, &resolved.identity);

        let tracker = self.state.tracker();
        match event {
            ObserveEvent::Created => {
                let Some(seen) = tracker.get(&record.hex) else {
                    return event;
                };
                if resolved.source == IdentitySource::Override {
                    tracing::info!(
                        hex = %seen.hex,
                        callsign = %seen.callsign,
                        registration = %seen.registration,
                        aircraft_type = %seen.aircraft_type,
                        "New aircraft (override identity)"
                    );
                } else {
                    tracing::info!(
                        hex = %seen.hex,
                        callsign = %seen.callsign,
                        registration = %seen.registration,
                        aircraft_type = %seen.aircraft_type,
                        source = %resolved.source,
                        "New aircraft"
                    );
                }
            }
            ObserveEvent::Updated => {
                if let Some(seen) = tracker.get(&record.hex) {
                    tracing::info!(
                        hex = %seen.hex,
                        callsign = %seen.callsign,
                        registration = %seen.registration,
                        "Callsign updated"
                    );
                }
            }
            ObserveEvent::IgnoredStaleCallsign => {
                tracing::debug!(hex = %record.hex, "Callsign lost, keeping previous");
            }
            ObserveEvent::Unchanged => {}
        }

        event
    }

    /// Render the current day's report.
    pub fn render(&self, timestamp: DateTime<Utc>) -> Vec<ReportPage> {
        self.builder.build_for(self.state.tracker(), timestamp)
    }

    /// The current day's state.
    pub fn state(&self) -> &DayState {
        &self.state
    }

    pub fn resolver(&self) -> &IdentityResolver {
        &self.resolver
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    pub fn feed(&self) -> &F {
        &self.feed
    }

    pub fn clock(&self) -> &K {
        &self.clock
    }
}
