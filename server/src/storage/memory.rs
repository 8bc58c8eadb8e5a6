use std::sync::Arc;

use tokio::sync::RwLock;

use super::{Storage, StorageError};
use crate::model::{Todo, TodoId};

#[derive(Debug, Default)]
struct Inner {
    todos: Vec<Todo>,
    next_id: u64,
}

/// Insertion-ordered in-memory store.
///
/// Clones share the same underlying list. Writers take the lock for the whole
/// id-assign-and-push step, so concurrent creates never hand out the same id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for InMemoryStorage {
    async fn add_todo(&self, title: String, content: String) -> Result<Todo, StorageError> {
        let mut inner = self.inner.write().await;
        let todo = Todo::new(TodoId(inner.next_id), title, content);
        inner.next_id += 1;
        inner.todos.push(todo.clone());
        tracing::debug!(id = %todo.id, "todo added");
        Ok(todo)
    }

    async fn get_todo(&self, id: TodoId) -> Result<Todo, StorageError> {
        let inner = self.inner.read().await;
        inner
            .todos
            .iter()
            .find(|todo| todo.id == id)
            .cloned()
            .ok_or(StorageError::NotFound(id))
    }

    async fn get_all(&self) -> Result<Vec<Todo>, StorageError> {
        Ok(self.inner.read().await.todos.clone())
    }

    async fn finish_todo(&self, id: TodoId) -> Result<(), StorageError> {
        let mut inner = self.inner.write().await;
        let todo = inner
            .todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(StorageError::NotFound(id))?;
        todo.mark_finished();
        tracing::debug!(%id, "todo finished");
        Ok(())
    }
}
