//! Feed records and snapshot parsing.

use serde::Deserialize;
use serde_json::Value;

use super::error::FeedError;
use crate::registry::normalize_hex;

/// One aircraft from a feed snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRecord {
    /// Normalized hex identifier (trimmed, lowercase, never empty).
    pub hex: String,
    /// Flight callsign, trimmed. Empty when the feed did not report one.
    pub flight: String,
}

impl FeedRecord {
    /// Create a record, normalizing hex and trimming the callsign.
    ///
    /// Returns `None` for a blank hex.
    pub fn new(hex: &str, flight: &str) -> Option<Self> {
        let hex = normalize_hex(hex);
        if hex.is_empty() {
            return None;
        }
        Some(Self {
            hex,
            flight: flight.trim().to_string(),
        })
    }

    /// Extract a record from one element of the `aircraft` array.
    ///
    /// Elements without a string `hex` are rejected. A missing or
    /// non-string `flight` is treated as empty.
    fn from_value(value: &Value) -> Option<Self> {
        let hex = value.get("hex").and_then(Value::as_str)?;
        let flight = value.get("flight").and_then(Value::as_str).unwrap_or("");
        Self::new(hex, flight)
    }
}

/// A parsed feed snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    /// Usable records, in feed order.
    pub records: Vec<FeedRecord>,
    /// Elements dropped for a missing or malformed hex.
    pub skipped: usize,
}

/// Top-level `aircraft.json` document.
///
/// Only the `aircraft` array is read; `now`, `messages` and the rest are ignored.
#[derive(Deserialize)]
struct AircraftDocument {
    #[serde(default)]
    aircraft: Vec<Value>,
}

/// Parse an `aircraft.json` payload.
///
/// An empty or whitespace-only body is an empty snapshot, not an error.
pub fn parse_snapshot(body: &[u8]) -> Result<Snapshot, FeedError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Snapshot::default());
    }

    let document: AircraftDocument =
        serde_json::from_slice(body).map_err(|e| FeedError::Json(e.to_string()))?;

    let mut snapshot = Snapshot::default();
    for element in &document.aircraft {
        match FeedRecord::from_value(element) {
            Some(record) => snapshot.records.push(record),
            None => snapshot.skipped += 1,
        }
    }

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dump1090_document() {
        let json = r#"{
            "now": 1760572800.1,
            "messages": 123456,
            "aircraft": [
                {"hex": "ABC123", "flight": "UAL123  ", "alt_baro": 35000, "rssi": -20.1},
                {"hex": "def456", "squawk": "7000"},
                {"hex": "~2a0001", "flight": "", "type": "tisb_icao"}
            ]
        }"#;

        let snapshot = parse_snapshot(json.as_bytes()).unwrap();
        assert_eq!(snapshot.skipped, 0);
        assert_eq!(
            snapshot.records,
            vec![
                FeedRecord::new("abc123", "UAL123").unwrap(),
                FeedRecord::new("def456", "").unwrap(),
                FeedRecord::new("~2a0001", "").unwrap(),
            ]
        );
        assert_eq!(snapshot.records[0].hex, "abc123");
        assert_eq!(snapshot.records[0].flight, "UAL123");
    }

    #[test]
    fn test_malformed_hex_skipped() {
        let json = r#"{"aircraft": [
            {"flight": "NOHEX1"},
            {"hex": 12345},
            {"hex": "   "},
            {"hex": "abc123", "flight": 42}
        ]}"#;

        let snapshot = parse_snapshot(json.as_bytes()).unwrap();
        assert_eq!(snapshot.skipped, 3);
        assert_eq!(snapshot.records.len(), 1);
        assert_eq!(snapshot.records[0].flight, "");
    }

    #[test]
    fn test_empty_body_is_empty_snapshot() {
        assert_eq!(parse_snapshot(b"").unwrap(), Snapshot::default());
        assert_eq!(parse_snapshot(b" \n ").unwrap(), Snapshot::default());
    }

    #[test]
    fn test_missing_aircraft_array_is_empty() {
        let snapshot = parse_snapshot(br#"{"now": 1.0}"#).unwrap();
        assert!(snapshot.records.is_empty());
    }

    #[test]
    fn test_invalid_json_is_error() {
        let result = parse_snapshot(b"<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(FeedError::Json(_))));
    }

    #[test]
    fn test_feed_record_new_rejects_blank_hex() {
        assert!(FeedRecord::new("  ", "UAL1").is_none());
    }
}
