//! Feed source trait and dump1090 HTTP implementation.

use std::future::Future;
use std::time::Duration;

use super::error::FeedError;
use super::record::{parse_snapshot, Snapshot};

/// Default dump1090 `aircraft.json` URL.
pub const DEFAULT_FEED_URL: &str = "http://127.0.0.1:8080/data/aircraft.json";

/// Default HTTP timeout for a feed fetch.
pub const DEFAULT_FEED_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of aircraft snapshots.
pub trait FeedSource: Send + Sync {
    /// Fetch the aircraft currently being received.
    fn fetch_snapshot(&self) -> impl Future<Output = Result<Snapshot, FeedError>> + Send;
}

/// Fetches `aircraft.json` from a dump1090-compatible decoder.
///
/// Holds a reusable `reqwest::Client` so connections are pooled across polls.
pub struct Dump1090Client {
    http: reqwest::Client,
    url: String,
}

impl Dump1090Client {
    /// Create a client for the given `aircraft.json` URL.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FeedError::ClientBuild(e.to_string()))?;

        Ok(Self {
            http,
            url: url.into(),
        })
    }

    /// The URL being polled.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl FeedSource for Dump1090Client {
    async fn fetch_snapshot(&self) -> Result<Snapshot, FeedError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FeedError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FeedError::Http(e.to_string()))?;

        let snapshot = parse_snapshot(&bytes)?;

        tracing::debug!(
            aircraft = snapshot.records.len(),
            skipped = snapshot.skipped,
            "Feed snapshot fetched"
        );

        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> Dump1090Client {
        Dump1090Client::new(
            format!("{}/data/aircraft.json", server.uri()),
            DEFAULT_FEED_TIMEOUT,
        )
        .unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = Dump1090Client::new(DEFAULT_FEED_URL, DEFAULT_FEED_TIMEOUT).unwrap();
        assert_eq!(client.url(), DEFAULT_FEED_URL);
    }

    #[tokio::test]
    async fn test_fetch_snapshot_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/aircraft.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "now": 1760572800.0,
                "aircraft": [
                    {"hex": "abc123", "flight": "N100    "},
                    {"hex": "def456"}
                ]
            })))
            .mount(&server)
            .await;

        let snapshot = client_for(&server).await.fetch_snapshot().await.unwrap();
        assert_eq!(snapshot.records.len(), 2);
        assert_eq!(snapshot.records[0].flight, "N100");
        assert_eq!(snapshot.records[1].flight, "");
    }

    #[tokio::test]
    async fn test_fetch_snapshot_http_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/aircraft.json"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let result = client_for(&server).await.fetch_snapshot().await;
        assert!(matches!(result, Err(FeedError::Status(503))));
    }

    #[tokio::test]
    async fn test_fetch_snapshot_empty_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/aircraft.json"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let snapshot = client_for(&server).await.fetch_snapshot().await.unwrap();
        assert!(snapshot.records.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_snapshot_connection_refused() {
        // Port 9 (discard) is not listening on test hosts.
        let client =
            Dump1090Client::new("http://127.0.0.1:9/data/aircraft.json", Duration::from_secs(2))
                .unwrap();
        let result = client.fetch_snapshot().await;
        assert!(matches!(result, Err(FeedError::Http(_))));
    }
}
