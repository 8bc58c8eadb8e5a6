//! Wire DTOs for the todo API.
//!
//! # Design
//! These mirror the server's schema but are defined independently so the
//! client does not pull in axum. The integration test against a live server
//! catches any drift between the two crates.

use serde::{Deserialize, Serialize};

/// A todo as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub finished: bool,
}

/// Request payload for `POST /todo/create`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddTodo {
    pub title: String,
    pub content: String,
}

impl AddTodo {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}
