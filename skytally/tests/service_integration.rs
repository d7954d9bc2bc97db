//! Integration tests for the poll cycle.
//!
//! Drives `StatsService` end to end with an in-memory feed, an in-memory
//! channel and a manual clock:
//! - identity resolution and report rendering
//! - edit-in-place across cycles, resend of deleted messages
//! - UTC day rollover
//! - feed failures
//! - scheduler cancellation
//!
//! Run with: `cargo test --test service_integration`

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use tokio_util::sync::CancellationToken;

use skytally::clock::ManualClock;
use skytally::feed::{FeedError, FeedRecord, FeedSource, Snapshot};
use skytally::notify::{ChannelError, EditOutcome, MessageId, NotificationChannel};
use skytally::registry::{Identity, IdentityResolver, Registry};
use skytally::report::{ReportBuilder, ReportPage};
use skytally::service::{run_scheduler, ServiceError, StatsService};

// ============================================================================
// Test Doubles
// ============================================================================

/// Feed returning whatever aircraft were last set.
#[derive(Default)]
struct ScriptedFeed {
    aircraft: Mutex<Vec<(String, String)>>,
    failing: AtomicBool,
    fetches: AtomicU64,
}

impl ScriptedFeed {
    fn set(&self, aircraft: &[(&str, &str)]) {
        *self.aircraft.lock().unwrap() = aircraft
            .iter()
            .map(|(hex, flight)| (hex.to_string(), flight.to_string()))
            .collect();
    }

    fn fail(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl FeedSource for ScriptedFeed {
    async fn fetch_snapshot(&self) -> Result<Snapshot, FeedError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(FeedError::Http("connection refused".to_string()));
        }
        let records = self
            .aircraft
            .lock()
            .unwrap()
            .iter()
            .filter_map(|(hex, flight)| FeedRecord::new(hex, flight))
            .collect();
        Ok(Snapshot {
            records,
            skipped: 0,
        })
    }
}

/// Channel keeping messages in memory, like a chat channel would.
struct MemoryChannel {
    next_id: AtomicU64,
    messages: Mutex<HashMap<MessageId, ReportPage>>,
    operations: Mutex<Vec<String>>,
}

impl Default for MemoryChannel {
    fn default() -> Self {
        Self {
            next_id: AtomicU64::new(100),
            messages: Mutex::new(HashMap::new()),
            operations: Mutex::new(Vec::new()),
        }
    }
}

impl MemoryChannel {
    fn message(&self, id: MessageId) -> Option<ReportPage> {
        self.messages.lock().unwrap().get(&id).cloned()
    }

    fn delete(&self, id: MessageId) {
        self.messages.lock().unwrap().remove(&id);
    }

    fn operations(&self) -> Vec<String> {
        self.operations.lock().unwrap().clone()
    }

    fn message_count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }
}

impl NotificationChannel for MemoryChannel {
    async fn send_message(&self, page: &ReportPage) -> Result<MessageId, ChannelError> {
        let id = MessageId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.messages.lock().unwrap().insert(id, page.clone());
        self.operations.lock().unwrap().push(format!("send {}", id));
        Ok(id)
    }

    async fn edit_message(
        &self,
        id: MessageId,
        page: &ReportPage,
    ) -> Result<EditOutcome, ChannelError> {
        self.operations.lock().unwrap().push(format!("edit {}", id));
        let mut messages = self.messages.lock().unwrap();
        match messages.get_mut(&id) {
            Some(existing) => {
                *existing = page.clone();
                Ok(EditOutcome::Edited)
            }
            None => Ok(EditOutcome::NotFound),
        }
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

type TestService = StatsService<ScriptedFeed, MemoryChannel, ManualClock>;

fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, day, hour, minute, 0).unwrap()
}

fn resolver() -> IdentityResolver {
    let mut primary = Registry::new();
    primary.insert("abc123", Identity::new("N100", "Cessna", ""));
    primary.insert("def456", Identity::new("D-AIBL", "A320", "Lufthansa"));
    primary.insert("aaa001", Identity::new("N201", "B738", "United"));

    let mut overrides = Registry::new();
    overrides.insert("def456", Identity::new("G-ABCD", "A321", "Private"));

    IdentityResolver::new(primary, overrides)
}

fn service_at(now: DateTime<Utc>) -> TestService {
    StatsService::new(
        resolver(),
        ScriptedFeed::default(),
        MemoryChannel::default(),
        ManualClock::new(now),
    )
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_first_cycle_posts_report() {
    let mut service = service_at(at(16, 10, 0));
    service.feed().set(&[("abc123", "")]);

    let summary = service.run_cycle().await.unwrap();

    assert_eq!(summary.date, NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
    assert!(!summary.rolled_over);
    assert_eq!(summary.created, 1);
    assert_eq!(summary.pages, 1);
    assert_eq!(summary.sent, 1);
    assert_eq!(summary.edited, 0);

    let page = service.channel().message(MessageId(100)).unwrap();
    assert_eq!(page.header.title, "✈️ Aircraft Seen — 2026-10-16 UTC");
    assert_eq!(
        page.header.description,
        "Unique aircraft today: 1\nMost common type: Cessna (1)"
    );
    assert_eq!(page.fields.len(), 1);
    assert_eq!(page.fields[0].name, "Cessna (1)");
    assert_eq!(page.fields[0].value, "N100 (N100)");
    assert_eq!(page.header.timestamp, at(16, 10, 0));
}

#[tokio::test]
async fn test_empty_feed_posts_header_page() {
    let mut service = service_at(at(16, 10, 0));

    let summary = service.run_cycle().await.unwrap();

    assert_eq!(summary.pages, 1);
    let page = service.channel().message(MessageId(100)).unwrap();
    assert!(page.fields.is_empty());
    assert_eq!(
        page.header.description,
        "Unique aircraft today: 0\nMost common type: None"
    );
}

#[tokio::test]
async fn test_later_cycles_edit_in_place() {
    let mut service = service_at(at(16, 10, 0));
    service.feed().set(&[("abc123", "")]);
    service.run_cycle().await.unwrap();

    service.clock().advance(chrono::Duration::minutes(3));
    service.feed().set(&[("abc123", "UAL1"), ("def456", "BAW1")]);
    let summary = service.run_cycle().await.unwrap();

    assert_eq!(summary.created, 1);
    assert_eq!(summary.updated, 1);
    assert_eq!(summary.edited, 1);
    assert_eq!(summary.sent, 0);
    assert_eq!(service.channel().message_count(), 1);
    assert_eq!(service.channel().operations(), vec!["send 100", "edit 100"]);

    let page = service.channel().message(MessageId(100)).unwrap();
    assert_eq!(page.fields[0].value, "UAL1 (N100)");
    assert_eq!(page.fields[1].name, "A321 (1)");
    assert_eq!(page.fields[1].value, "BAW1 (G-ABCD)");
}

#[tokio::test]
async fn test_lost_callsign_is_ignored() {
    let mut service = service_at(at(16, 10, 0));
    service.feed().set(&[("abc123", "UAL1")]);
    service.run_cycle().await.unwrap();

    service.feed().set(&[("abc123", "")]);
    let summary = service.run_cycle().await.unwrap();

    assert_eq!(summary.ignored, 1);
    let seen = service.state().tracker().get("abc123").unwrap();
    assert_eq!(seen.callsign, "UAL1");
}

#[tokio::test]
async fn test_override_beats_primary() {
    let mut service = service_at(at(16, 10, 0));
    service.feed().set(&[("DEF456", "")]);
    service.run_cycle().await.unwrap();

    let seen = service.state().tracker().get("def456").unwrap();
    assert_eq!(seen.registration, "G-ABCD");
    assert_eq!(seen.aircraft_type, "A321");
    assert_eq!(seen.callsign, "G-ABCD");
}

#[tokio::test]
async fn test_unknown_aircraft_uses_hex() {
    let mut service = service_at(at(16, 10, 0));
    service.feed().set(&[("fffff0", "")]);
    service.run_cycle().await.unwrap();

    let page = service.channel().message(MessageId(100)).unwrap();
    assert_eq!(page.fields[0].name, "unknown (1)");
    assert_eq!(page.fields[0].value, "fffff0 (fffff0)");
}

#[tokio::test]
async fn test_deleted_message_is_resent() {
    let mut service = service_at(at(16, 10, 0));
    service.feed().set(&[("abc123", "")]);
    service.run_cycle().await.unwrap();

    service.channel().delete(MessageId(100));
    let summary = service.run_cycle().await.unwrap();

    assert_eq!(summary.sent, 1);
    assert_eq!(summary.edited, 0);
    assert_eq!(service.state().messages().get(0), Some(MessageId(101)));
    assert_eq!(
        service.channel().operations(),
        vec!["send 100", "edit 100", "send 101"]
    );
}

#[tokio::test]
async fn test_feed_failure_changes_nothing() {
    let mut service = service_at(at(16, 10, 0));
    service.feed().set(&[("abc123", "UAL1")]);
    service.run_cycle().await.unwrap();

    service.feed().set(&[("abc123", "DAL9"), ("def456", "")]);
    service.feed().fail(true);
    let result = service.run_cycle().await;

    assert!(matches!(result, Err(ServiceError::Feed(FeedError::Http(_)))));
    assert_eq!(service.state().tracker().unique_count(), 1);
    assert_eq!(service.state().tracker().get("abc123").unwrap().callsign, "UAL1");
    assert_eq!(service.channel().operations(), vec!["send 100"]);
}

#[tokio::test]
async fn test_rollover_clears_day() {
    let mut service = service_at(at(16, 23, 58));
    service.feed().set(&[("abc123", ""), ("def456", "")]);
    let first = service.run_cycle().await.unwrap();
    assert!(!first.rolled_over);

    service.clock().advance(chrono::Duration::minutes(3));
    service.feed().set(&[("aaa001", "UAL5")]);
    let second = service.run_cycle().await.unwrap();

    assert!(second.rolled_over);
    assert_eq!(second.date, NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
    assert_eq!(service.state().tracker().unique_count(), 1);
    assert!(!service.state().tracker().has_seen("abc123"));
    // New day starts a fresh message; yesterday's stays as it was.
    assert_eq!(second.sent, 1);
    assert_eq!(second.edited, 0);
    assert_eq!(service.state().messages().len(), 1);
    assert_eq!(service.state().messages().get(0), Some(MessageId(101)));

    let yesterday = service.channel().message(MessageId(100)).unwrap();
    assert_eq!(yesterday.header.title, "✈️ Aircraft Seen — 2026-10-16 UTC");
    let today = service.channel().message(MessageId(101)).unwrap();
    assert_eq!(today.header.title, "✈️ Aircraft Seen — 2026-10-17 UTC");
    assert_eq!(today.fields[0].value, "UAL5 (N201)");
}

#[tokio::test]
async fn test_report_grows_to_second_page() {
    let mut service =
        service_at(at(16, 9, 0)).with_report_builder(ReportBuilder::new().with_max_fields(2));
    service.feed().set(&[("abc123", ""), ("def456", "")]);
    service.run_cycle().await.unwrap();

    service.feed().set(&[("aaa001", "")]);
    let summary = service.run_cycle().await.unwrap();

    assert_eq!(summary.pages, 2);
    assert_eq!(summary.edited, 1);
    assert_eq!(summary.sent, 1);
    assert_eq!(service.state().messages().len(), 2);
}

#[tokio::test]
async fn test_scheduler_stops_between_cycles() {
    let mut service = service_at(at(16, 9, 0));
    service.feed().fail(true);
    let cancel = CancellationToken::new();

    let stopper = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(120)).await;
            cancel.cancel();
        })
    };

    let stats = run_scheduler(&mut service, Duration::from_millis(20), cancel).await;
    stopper.await.unwrap();

    assert!(stats.cycles >= 2);
    assert_eq!(stats.failed_cycles, stats.cycles);
    assert_eq!(service.feed().fetches.load(Ordering::SeqCst), stats.cycles);
}

#[tokio::test]
async fn test_scheduler_cancelled_before_start_runs_nothing() {
    let mut service = service_at(at(16, 9, 0));
    let cancel = CancellationToken::new();
    cancel.cancel();

    let stats = run_scheduler(&mut service, Duration::from_secs(180), cancel).await;

    assert_eq!(stats.cycles, 0);
    assert_eq!(service.feed().fetches.load(Ordering::SeqCst), 0);
}
