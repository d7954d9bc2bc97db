//! Once command - a single poll cycle.

use skytally::notify::{ConsoleChannel, NotificationChannel};
use skytally::service::{self, CycleSummary};

use crate::error::CliError;
use crate::runner::CliRunner;

/// Run one cycle against Discord, or against stdout with `dry_run`.
pub async fn run(dry_run: bool, debug: bool) -> Result<(), CliError> {
    // Pages go to stdout on a dry run; keep logs in the file only.
    let runner = CliRunner::new(debug, !dry_run)?;
    runner.log_startup("once");

    let summary = if dry_run {
        run_with(&runner, ConsoleChannel::new()).await?
    } else {
        let channel = service::create_discord(runner.config())?;
        run_with(&runner, channel).await?
    };

    print_summary(&summary);
    Ok(())
}

async fn run_with<C>(runner: &CliRunner, channel: C) -> Result<CycleSummary, CliError>
where
    C: NotificationChannel,
{
    let mut stats = runner.create_service(channel)?;
    stats.run_cycle().await.map_err(CliError::Cycle)
}

fn print_summary(summary: &CycleSummary) {
    println!();
    println!("Day: {} UTC", summary.date);
    println!(
        "Aircraft in feed: {} ({} malformed skipped)",
        summary.records, summary.skipped_records
    );
    println!(
        "New: {}  Callsign updates: {}  Lost callsigns ignored: {}",
        summary.created, summary.updated, summary.ignored
    );
    println!(
        "Pages: {}  Edited: {}  Sent: {}  Failed: {}",
        summary.pages, summary.edited, summary.sent, summary.failures
    );
}
