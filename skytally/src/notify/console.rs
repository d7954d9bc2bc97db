//! Stdout channel for dry runs.

use std::sync::atomic::{AtomicU64, Ordering};

use super::channel::{EditOutcome, MessageId, NotificationChannel};
use super::error::ChannelError;
use crate::report::ReportPage;

/// Prints pages to stdout instead of posting them.
///
/// Ids are handed out sequentially from 1; editing an id that was never
/// handed out reports [`EditOutcome::NotFound`].
#[derive(Debug)]
pub struct ConsoleChannel {
    next_id: AtomicU64,
}

impl Default for ConsoleChannel {
    fn default() -> Self {
        Self {
            next_id: AtomicU64::new(1),
        }
    }
}

impl ConsoleChannel {
    pub fn new() -> Self {
        Self::default()
    }

    fn issued(&self, id: MessageId) -> bool {
        id.0 != 0 && id.0 < self.next_id.load(Ordering::SeqCst)
    }
}

impl NotificationChannel for ConsoleChannel {
    async fn send_message(&self, page: &ReportPage) -> Result<MessageId, ChannelError> {
        let id = MessageId(self.next_id.fetch_add(1, Ordering::SeqCst));
        println!("── message {} ──", id);
        print!("{}", page);
        Ok(id)
    }

    async fn edit_message(
        &self,
        id: MessageId,
        page: &ReportPage,
    ) -> Result<EditOutcome, ChannelError> {
        if !self.issued(id) {
            return Ok(EditOutcome::NotFound);
        }
        println!("── message {} (edited) ──", id);
        print!("{}", page);
        Ok(EditOutcome::Edited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportHeader;
    use chrono::{TimeZone, Utc};

    fn page() -> ReportPage {
        let timestamp = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        ReportPage::new(ReportHeader::new(timestamp, 0, "None"))
    }

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let channel = ConsoleChannel::new();
        assert_eq!(channel.send_message(&page()).await.unwrap(), MessageId(1));
        assert_eq!(channel.send_message(&page()).await.unwrap(), MessageId(2));
    }

    #[tokio::test]
    async fn test_edit_known_and_unknown() {
        let channel = ConsoleChannel::new();
        let id = channel.send_message(&page()).await.unwrap();

        assert_eq!(
            channel.edit_message(id, &page()).await.unwrap(),
            EditOutcome::Edited
        );
        assert_eq!(
            channel.edit_message(MessageId(0), &page()).await.unwrap(),
            EditOutcome::NotFound
        );
        assert_eq!(
            channel.edit_message(MessageId(99), &page()).await.unwrap(),
            EditOutcome::NotFound
        );
    }
}
