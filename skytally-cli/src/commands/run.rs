//! Run command - poll on a fixed delay until interrupted.

use tokio_util::sync::CancellationToken;
use tracing::info;

use skytally::service::{self, run_scheduler};

use crate::error::CliError;
use crate::runner::CliRunner;

/// Run the scheduler until Ctrl+C.
///
/// A cycle in progress when Ctrl+C arrives is allowed to finish.
pub async fn run(debug: bool) -> Result<(), CliError> {
    let runner = CliRunner::new(debug, true)?;
    runner.log_startup("run");
    let config = runner.config();

    let channel = service::create_discord(config)?;
    info!(channel_id = channel.channel_id(), "Posting reports to Discord");
    let mut stats = runner.create_service(channel)?;

    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Shutdown requested, finishing current cycle"),
            Err(e) => tracing::error!(error = %e, "Failed to listen for Ctrl+C, stopping"),
        }
        shutdown.cancel();
    });

    let totals = run_scheduler(&mut stats, config.schedule.interval(), cancel).await;

    println!(
        "Stopped after {} cycle(s), {} failed.",
        totals.cycles, totals.failed_cycles
    );
    Ok(())
}
