//! Storage capability behind the HTTP handlers.
//!
//! Handlers only see the [`Storage`] trait, so any backend offering the four
//! operations can be plugged into [`crate::app`]. Two backends ship here:
//! [`InMemoryStorage`], the real store, and [`FailingStorage`], which rejects
//! every call and is used to pin down the handlers' error responses.

mod failing;
mod memory;

use std::future::Future;

use crate::model::{Todo, TodoId};

pub use failing::FailingStorage;
pub use memory::InMemoryStorage;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("todo {0} not found")]
    NotFound(TodoId),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// The operations every todo backend provides.
///
/// Records are returned by value; the only way to change a stored todo is
/// through these methods.
pub trait Storage: Clone + Send + Sync + 'static {
    /// Create a todo with the next identifier and `finished = false`.
    fn add_todo(
        &self,
        title: String,
        content: String,
    ) -> impl Future<Output = Result<Todo, StorageError>> + Send;

    fn get_todo(&self, id: TodoId) -> impl Future<Output = Result<Todo, StorageError>> + Send;

    /// All todos in creation order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Todo>, StorageError>> + Send;

    /// Mark a todo finished. Finishing an already finished todo succeeds.
    fn finish_todo(&self, id: TodoId) -> impl Future<Output = Result<(), StorageError>> + Send;
}
