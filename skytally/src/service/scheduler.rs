//! Fixed-delay scheduling of poll cycles.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::cycle::StatsService;
use crate::clock::Clock;
use crate::feed::FeedSource;
use crate::notify::NotificationChannel;

/// Totals for a scheduler run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulerStats {
    /// Cycles started.
    pub cycles: u64,
    /// Cycles that returned an error.
    pub failed_cycles: u64,
}

/// Run poll cycles until `cancel` fires.
///
/// The first cycle starts immediately. After each cycle, successful or not,
/// the scheduler waits `interval` before starting the next. Cancellation is
/// only observed during that wait; a running cycle always completes.
pub async fn run_scheduler<F, C, K>(
    service: &mut StatsService<F, C, K>,
    interval: Duration,
    cancel: CancellationToken,
) -> SchedulerStats
where
    F: FeedSource,
    C: NotificationChannel,
    K: Clock,
{
    let mut stats = SchedulerStats::default();

    tracing::info!(interval_secs = interval.as_secs(), "Scheduler started");

    while !cancel.is_cancelled() {
        stats.cycles += 1;
        if let Err(e) = service.run_cycle().await {
            stats.failed_cycles += 1;
            tracing::warn!(error = %e, cycle = stats.cycles, "Poll cycle failed");
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = tokio::time::sleep(interval) => {}
        }
    }

    tracing::info!(
        cycles = stats.cycles,
        failed = stats.failed_cycles,
        "Scheduler stopped"
    );
    stats
}
