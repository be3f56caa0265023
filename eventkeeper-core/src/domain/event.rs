//! Event domain model

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Message recorded when the caller does not supply one
pub const DEFAULT_MESSAGE: &str = "hello";

/// A timestamped text event stored in the `events` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    /// UTC ISO-8601 with microseconds and a `Z` suffix
    pub timestamp: String,
    pub message: String,
}

impl Event {
    pub fn new(id: i64, timestamp: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id,
            timestamp: timestamp.into(),
            message: message.into(),
        }
    }
}

/// Render a UTC instant the way event timestamps are stored
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(format_timestamp(at), "2024-05-01T12:00:00.000000Z");
    }

    #[test]
    fn test_event_serializes_flat() {
        let event = Event::new(7, "2024-05-01T12:00:00.000000Z", "deploy");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "timestamp": "2024-05-01T12:00:00.000000Z",
                "message": "deploy"
            })
        );
    }
}
