//! Reconciliation between rendered pages and previously sent messages.

use super::channel::{EditOutcome, NotificationChannel};
use super::error::ChannelError;
use super::history::MessageHistory;
use crate::report::ReportPage;

/// Which channel operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOperation {
    Edit,
    Send,
}

/// A page that could not be published this cycle.
#[derive(Debug)]
pub struct SyncFailure {
    pub page: usize,
    pub operation: SyncOperation,
    pub error: ChannelError,
}

/// Outcome of one [`sync_pages`] run.
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Pages written into an existing message.
    pub edited: usize,
    /// Pages posted as new messages.
    pub sent: usize,
    /// Pages that failed; they are retried by index next cycle.
    pub failures: Vec<SyncFailure>,
}

impl SyncReport {
    /// Returns true if every page was published.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Publish `pages`, editing recorded messages where possible.
///
/// For page `i`: if the history holds a message id at slot `i`, edit it. If
/// that message is gone, or there is no id, send a new message and record it
/// at slot `i`. A failure on one page is recorded and the remaining pages
/// are still processed. Failed sends leave the slot as it was.
///
/// Slots beyond `pages.len()` are left untouched; their messages are not
/// deleted.
pub async fn sync_pages<C>(
    pages: &[ReportPage],
    history: &mut MessageHistory,
    channel: &C,
) -> SyncReport
where
    C: NotificationChannel,
{
    let mut report = SyncReport::default();

    for (index, page) in pages.iter().enumerate() {
        if let Some(id) = history.get(index) {
            match channel.edit_message(id, page).await {
                Ok(EditOutcome::Edited) => {
                    tracing::debug!(page = index, message_id = %id, "Report page edited");
                    report.edited += 1;
                    continue;
                }
                Ok(EditOutcome::NotFound) => {
                    tracing::info!(
                        page = index,
                        message_id = %id,
                        "Report message no longer exists, sending a new one"
                    );
                }
                Err(error) => {
                    tracing::warn!(
                        page = index,
                        message_id = %id,
                        error = %error,
                        "Failed to edit report page"
                    );
                    report.failures.push(SyncFailure {
                        page: index,
                        operation: SyncOperation::Edit,
                        error,
                    });
                    continue;
                }
            }
        }

        match channel.send_message(page).await {
            Ok(id) => {
                tracing::debug!(page = index, message_id = %id, "Report page sent");
                history.record(index, id);
                report.sent += 1;
            }
            Err(error) => {
                tracing::warn!(page = index, error = %error, "Failed to send report page");
                report.failures.push(SyncFailure {
                    page: index,
                    operation: SyncOperation::Send,
                    error,
                });
            }
        }
    }

    report
}
