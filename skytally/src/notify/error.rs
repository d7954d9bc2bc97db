//! Error types for notification channels.

use thiserror::Error;

/// Errors that can occur when sending or editing a message.
///
/// A missing message on edit is not an error; see
/// [`EditOutcome::NotFound`](super::EditOutcome::NotFound).
#[derive(Debug, Error)]
pub enum ChannelError {
    /// Failed to build the HTTP client.
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The API answered with a non-success status.
    #[error("Channel API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The API is rate limiting us.
    #[error("Rate limited (retry after {retry_after_secs:.1}s)")]
    RateLimited { retry_after_secs: f64 },

    /// The response could not be understood.
    #[error("Unexpected channel response: {0}")]
    InvalidResponse(String),
}
