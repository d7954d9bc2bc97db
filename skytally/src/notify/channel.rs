//! Notification channel trait.

use std::fmt;
use std::future::Future;

use super::error::ChannelError;
use crate::report::ReportPage;

/// Identifier of a message posted to a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of an edit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The message was updated in place.
    Edited,
    /// The message no longer exists (deleted by a user or moderator).
    NotFound,
}

/// A destination for report pages.
///
/// Implementations render a page however the destination needs it (embed,
/// plain text). Each message holds at most
/// [`MAX_FIELDS_PER_PAGE`](crate::report::MAX_FIELDS_PER_PAGE) fields.
pub trait NotificationChannel: Send + Sync {
    /// Post a new message and return its id.
    fn send_message(
        &self,
        page: &ReportPage,
    ) -> impl Future<Output = Result<MessageId, ChannelError>> + Send;

    /// Replace the content of an existing message.
    fn edit_message(
        &self,
        id: MessageId,
        page: &ReportPage,
    ) -> impl Future<Output = Result<EditOutcome, ChannelError>> + Send;
}
