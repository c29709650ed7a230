//! Entity model for the todo service.
//!
//! # Design
//! `Todo` is plain data and enforces nothing on its own. Identity and the
//! creation timestamp are owned by the store: whatever a caller puts in `id`
//! or `created_on` before `add` is overwritten. Every field takes its zero
//! value when missing from JSON, so payloads may carry any subset of fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo item owned by a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Todo {
    pub id: String,
    pub username: String,
    pub text: String,
    pub completed: bool,
    pub created_on: DateTime<Utc>,
}

impl Todo {
    /// An unsaved todo. `id` and `created_on` are filled in by the store.
    pub fn new(username: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            text: text.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_with_wire_field_names() {
        let todo = Todo {
            id: "abc".to_string(),
            username: "alice".to_string(),
            text: "buy milk".to_string(),
            completed: true,
            created_on: DateTime::<Utc>::UNIX_EPOCH,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], "abc");
        assert_eq!(json["username"], "alice");
        assert_eq!(json["text"], "buy milk");
        assert_eq!(json["completed"], true);
        assert_eq!(json["created_on"], "1970-01-01T00:00:00Z");
    }

    #[test]
    fn create_payload_may_omit_engine_fields() {
        let todo: Todo =
            serde_json::from_str(r#"{"username":"bob","text":"walk dog"}"#).unwrap();
        assert!(todo.id.is_empty());
        assert!(!todo.completed);
        assert_eq!(todo.created_on, DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn missing_fields_decode_as_zero_values() {
        let todo: Todo = serde_json::from_str(r#"{"id":"x1","completed":true}"#).unwrap();
        assert_eq!(todo.id, "x1");
        assert!(todo.completed);
        assert!(todo.username.is_empty());
        assert!(todo.text.is_empty());

        let orphan: Todo = serde_json::from_str(r#"{"text":"orphan"}"#).unwrap();
        assert!(orphan.username.is_empty());
        assert_eq!(orphan.text, "orphan");
    }

    #[test]
    fn new_leaves_identity_unset() {
        let todo = Todo::new("carol", "call mom");
        assert_eq!(todo.username, "carol");
        assert_eq!(todo.text, "call mom");
        assert!(todo.id.is_empty());
    }
}
