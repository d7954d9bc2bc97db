//! Error types for the aircraft feed.

use thiserror::Error;

/// Errors that can occur when fetching a feed snapshot.
///
/// All variants are transient from the poll cycle's point of view: the cycle
/// is abandoned and the next one retries after the normal delay.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Failed to build the HTTP client.
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The feed answered with a non-success status.
    #[error("Feed returned HTTP {0}")]
    Status(u16),

    /// The payload is not valid JSON.
    #[error("Failed to parse feed payload: {0}")]
    Json(String),
}
