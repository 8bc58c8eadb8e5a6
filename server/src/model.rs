//! Todo entity and request payloads served by the API.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier assigned by storage at creation time.
///
/// Serialized as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(TodoId)
    }
}

/// A single todo record. Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub content: String,
    pub finished: bool,
}

impl Todo {
    pub fn new(id: TodoId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            finished: false,
        }
    }

    pub fn mark_finished(&mut self) {
        self.finished = true;
    }

    pub fn mark_unfinished(&mut self) {
        self.finished = false;
    }
}

/// Body of `POST /todo/create`. Extra fields in the JSON are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddRequest {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl AddRequest {
    /// Reject payloads that decoded fine but carry no title.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.is_empty() {
            return Err("title must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_keys_in_order() {
        let todo = Todo::new(TodoId(0), "lol", "kek");
        let json = serde_json::to_string(&todo).unwrap();
        assert_eq!(json, r#"{"id":0,"title":"lol","content":"kek","finished":false}"#);
    }

    #[test]
    fn mark_finished_then_unfinished() {
        let mut todo = Todo::new(TodoId(1), "Test Todo 1", "Some content");
        todo.mark_finished();
        assert!(todo.finished);
        todo.mark_unfinished();
        assert!(!todo.finished);
    }

    #[test]
    fn todo_id_parses_non_negative_integers_only() {
        assert_eq!("42".parse::<TodoId>().unwrap(), TodoId(42));
        assert!("abc".parse::<TodoId>().is_err());
        assert!("-1".parse::<TodoId>().is_err());
        assert!("".parse::<TodoId>().is_err());
    }

    #[test]
    fn add_request_defaults_content_to_empty() {
        let input: AddRequest = serde_json::from_str(r#"{"title":"No content"}"#).unwrap();
        assert_eq!(input.title, "No content");
        assert_eq!(input.content, "");
    }

    #[test]
    fn add_request_ignores_unknown_fields() {
        let input: AddRequest = serde_json::from_str(
            r#"{"id":1,"title":"Test Todo 1","content":"Some content","finished":false}"#,
        )
        .unwrap();
        assert_eq!(input.title, "Test Todo 1");
        assert_eq!(input.content, "Some content");
    }

    #[test]
    fn add_request_rejects_missing_title() {
        let result: Result<AddRequest, _> = serde_json::from_str(r#"{"content":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn add_request_validate_rejects_empty_title() {
        let input = AddRequest {
            title: String::new(),
            content: "x".to_string(),
        };
        assert!(input.validate().is_err());
    }
}
