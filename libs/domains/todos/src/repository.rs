use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::TodoResult;
use crate::models::Todo;

/// Repository trait for todo persistence
///
/// This trait defines the data access interface for todos.
/// Implementations can use different storage backends; the service only
/// sees this contract and never translates failures coming out of it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Return every stored record in insertion order
    async fn list(&self) -> TodoResult<Vec<Todo>>;

    /// Persist a fully prepared record and return the stored row
    async fn create(&self, record: Todo) -> TodoResult<Todo>;
}

/// In-memory implementation of TodoRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryTodoRepository {
    todos: Arc<RwLock<Vec<Todo>>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn list(&self) -> TodoResult<Vec<Todo>> {
        let todos = self.todos.read().await;
        Ok(todos.clone())
    }

    async fn create(&self, record: Todo) -> TodoResult<Todo> {
        let mut todos = self.todos.write().await;
        todos.push(record.clone());

        tracing::info!(todo_id = %record.id, "Created todo");
        Ok(record)
    }
}
