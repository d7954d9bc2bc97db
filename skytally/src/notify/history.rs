//! Positional record of the messages that represent the current report.

use super::channel::MessageId;

/// Message ids indexed by page number.
///
/// A slot may be empty when the send for that page failed and no earlier
/// message existed; the next cycle retries the same slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageHistory {
    slots: Vec<Option<MessageId>>,
}

impl MessageHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Message recorded for a page, if any.
    pub fn get(&self, page: usize) -> Option<MessageId> {
        self.slots.get(page).copied().flatten()
    }

    /// Record the message for a page, overwriting any previous id.
    ///
    /// Recording past the end appends, leaving any skipped slots empty.
    pub fn record(&mut self, page: usize, id: MessageId) {
        if page >= self.slots.len() {
            self.slots.resize(page + 1, None);
        }
        self.slots[page] = Some(id);
    }

    /// Number of slots (pages ever published today).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no page has been published.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Recorded ids in page order, `None` for empty slots.
    pub fn slots(&self) -> &[Option<MessageId>] {
        &self.slots
    }
}
