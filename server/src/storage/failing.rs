use super::{Storage, StorageError};
use crate::model::{Todo, TodoId};

/// Backend whose every operation fails with [`StorageError::Unavailable`].
#[derive(Debug, Clone, Default)]
pub struct FailingStorage;

fn unavailable() -> StorageError {
    StorageError::Unavailable("failing storage".to_string())
}

impl Storage for FailingStorage {
    async fn add_todo(&self, _title: String, _content: String) -> Result<Todo, StorageError> {
        Err(unavailable())
    }

    async fn get_todo(&self, _id: TodoId) -> Result<Todo, StorageError> {
        Err(unavailable())
    }

    async fn get_all(&self) -> Result<Vec<Todo>, StorageError> {
        Err(unavailable())
    }

    async fn finish_todo(&self, _id: TodoId) -> Result<(), StorageError> {
        Err(unavailable())
    }
}
