//! Notification channel and report synchronization.
//!
//! A report is published as one message per [`ReportPage`](crate::report::ReportPage).
//! Rather than posting a fresh set of messages every cycle, the
//! [`sync_pages`] reconciler keeps a positional [`MessageHistory`]: page `i`
//! edits the message recorded at slot `i` if it still exists, and otherwise
//! sends a new message and records its id in that slot.
//!
//! # Architecture
//!
//! ```text
//! sync_pages(pages, &mut MessageHistory, &channel)
//!     │
//!     └── NotificationChannel trait
//!             ├── DiscordChannel (REST: POST / PATCH channel messages)
//!             └── ConsoleChannel (stdout, for dry runs)
//! ```
//!
//! Messages are never deleted. When the page count shrinks, trailing
//! messages from a larger report stay in the channel untouched.

mod channel;
mod console;
mod discord;
mod error;
mod history;
mod sync;

pub use channel::{EditOutcome, MessageId, NotificationChannel};
pub use console::ConsoleChannel;
pub use discord::{
    DiscordChannel, DiscordConfig, DEFAULT_DISCORD_API_BASE, EMBED_COLOR, MAX_EMBED_CHARS,
    MAX_FIELD_VALUE_CHARS,
};
pub use error::ChannelError;
pub use history::MessageHistory;
pub use sync::{sync_pages, SyncFailure, SyncOperation, SyncReport};
