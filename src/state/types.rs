//! Singer state types
//!
//! These types are serialized to JSON in STATE messages and read back on
//! the next run.

use crate::types::{json_as_f64, JsonValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete state for the tap
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// Per-stream bookmarks
    #[serde(default)]
    pub bookmarks: BTreeMap<String, StreamState>,
}

impl State {
    /// Create a new empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Get state for a stream
    pub fn get_stream(&self, stream: &str) -> Option<&StreamState> {
        self.bookmarks.get(stream)
    }

    /// Get mutable state for a stream, creating if needed
    pub fn get_stream_mut(&mut self, stream: &str) -> &mut StreamState {
        self.bookmarks.entry(stream.to_string()).or_default()
    }

    /// Numeric bookmark for a stream, if one is recorded
    pub fn bookmark(&self, stream: &str) -> Option<f64> {
        self.get_stream(stream)?.value()
    }

    /// Value sent as `modified_after` for the first request of a stream
    ///
    /// The larger of the stream's bookmark and `start_date`; whichever is
    /// present when only one is.
    pub fn starting_value(&self, stream: &str, start_date: Option<f64>) -> Option<f64> {
        match (self.bookmark(stream), start_date) {
            (Some(bookmark), Some(start)) => Some(bookmark.max(start)),
            (bookmark, start) => bookmark.or(start),
        }
    }

    /// Move a stream's bookmark forward
    ///
    /// Values that do not exceed the current bookmark are ignored. Returns
    /// whether the bookmark changed.
    pub fn advance(&mut self, stream: &str, replication_key: &str, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        if self.bookmark(stream).is_some_and(|current| current >= value) {
            return false;
        }

        let entry = self.get_stream_mut(stream);
        entry.replication_key = Some(replication_key.to_string());
        entry.replication_key_value = Some(JsonValue::from(value));
        true
    }
}

/// Bookmark for a single stream
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamState {
    /// Name of the replication key field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replication_key: Option<String>,

    /// Highest replication key value emitted so far
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replication_key_value: Option<JsonValue>,
}

impl StreamState {
    /// Create a new empty stream state
    pub fn new() -> Self {
        Self::default()
    }

    /// Bookmark value as a number; numeric strings are accepted
    pub fn value(&self) -> Option<f64> {
        self.replication_key_value.as_ref().and_then(json_as_f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_state_default() {
        let state = State::new();
        assert!(state.bookmarks.is_empty());
        assert!(state.bookmark("chats").is_none());
    }

    #[test]
    fn test_state_parse_singer_document() {
        let state: State = serde_json::from_value(json!({
            "bookmarks": {
                "pushes": {"replication_key": "modified", "replication_key_value": 1_700_000_000.5},
                "devices": {"replication_key": "modified", "replication_key_value": "1600000000"}
            }
        }))
        .unwrap();

        assert_eq!(state.bookmark("pushes"), Some(1_700_000_000.5));
        assert_eq!(state.bookmark("devices"), Some(1_600_000_000.0));
        assert_eq!(state.bookmark("chats"), None);
    }

    #[test]
    fn test_state_parse_empty_document() {
        let state: State = serde_json::from_str("{}").unwrap();
        assert!(state.bookmarks.is_empty());
    }

    #[test]
    fn test_starting_value() {
        let mut state = State::new();
        assert_eq!(state.starting_value("chats", None), None);
        assert_eq!(state.starting_value("chats", Some(100.0)), Some(100.0));

        state.advance("chats", "modified", 200.0);
        assert_eq!(state.starting_value("chats", None), Some(200.0));
        assert_eq!(state.starting_value("chats", Some(100.0)), Some(200.0));
        assert_eq!(state.starting_value("chats", Some(300.0)), Some(300.0));
    }

    #[test]
    fn test_advance_is_monotonic() {
        let mut state = State::new();

        assert!(state.advance("pushes", "modified", 10.0));
        assert!(!state.advance("pushes", "modified", 5.0));
        assert!(!state.advance("pushes", "modified", 10.0));
        assert!(state.advance("pushes", "modified", 11.5));
        assert!(!state.advance("pushes", "modified", f64::NAN));

        assert_eq!(state.bookmark("pushes"), Some(11.5));
    }

    #[test]
    fn test_state_serialization() {
        let mut state = State::new();
        state.advance("chats", "modified", 1.5);

        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(
            value,
            json!({
                "bookmarks": {
                    "chats": {"replication_key": "modified", "replication_key_value": 1.5}
                }
            })
        );

        let restored: State = serde_json::from_value(value).unwrap();
        assert_eq!(restored, state);
    }
}
