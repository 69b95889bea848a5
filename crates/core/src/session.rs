use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Proof of a logged-in state. Presence alone counts; there is no expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: String,
    /// Milliseconds since the Unix epoch.
    #[serde(rename = "ts", alias = "timestamp")]
    pub timestamp: i64,
}

impl Session {
    #[must_use]
    pub fn new(user: impl Into<String>, timestamp: i64) -> Self {
        Self { user: user.into(), timestamp }
    }

    /// Session stamped with the current wall-clock time.
    #[must_use]
    pub fn started_now(user: impl Into<String>) -> Self {
        Self::new(user, Utc::now().timestamp_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_uses_ts_key() {
        let session = Session::new("admin", 1_700_000_000_000);
        let json = serde_json::to_string(&session).unwrap();
        assert_eq!(json, r#"{"user":"admin","ts":1700000000000}"#);
    }

    #[test]
    fn test_timestamp_key_accepted_on_read() {
        let session: Session =
            serde_json::from_str(r#"{"user":"admin","timestamp":42}"#).unwrap();
        assert_eq!(session, Session::new("admin", 42));
    }
}
