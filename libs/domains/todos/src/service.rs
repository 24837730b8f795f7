use std::sync::Arc;
use tracing::instrument;

use crate::clock::{Clock, SystemClock};
use crate::error::{TodoError, TodoResult};
use crate::ids::{IdProvider, UuidProvider};
use crate::models::{Todo, TodoStatus};
use crate::repository::TodoRepository;

/// Service layer for todo business logic
///
/// Sits between callers and the repository: enriches and validates items
/// on the way in, transforms records on the way out. Holds no mutable
/// state of its own, so concurrent calls against one instance are
/// independent.
#[derive(Clone)]
pub struct TodoService<R: TodoRepository> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdProvider>,
}

impl<R: TodoRepository> TodoService<R> {
    /// Wire the service with the ambient wall clock and random UUIDs
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            clock: Arc::new(SystemClock),
            ids: Arc::new(UuidProvider),
        }
    }

    /// Replace the time source (tests pin "now" with this)
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Replace the identifier generator
    pub fn with_id_provider(mut self, ids: impl IdProvider + 'static) -> Self {
        self.ids = Arc::new(ids);
        self
    }

    /// List stored todos with `text` uppercased
    ///
    /// Every other field is carried over untouched and the repository's
    /// order is preserved. Repository failures propagate unchanged.
    #[instrument(skip(self))]
    pub async fn list(&self) -> TodoResult<Vec<Todo>> {
        let records = self.repository.list().await?;

        Ok(records
            .into_iter()
            .map(|record| Todo {
                text: record.text.to_uppercase(),
                ..record
            })
            .collect())
    }

    /// Validate, enrich, and persist one todo item
    ///
    /// An item needs both `text` and `when`; anything else is rejected
    /// without touching the repository. On the valid path the item gets a
    /// derived status (`Late` when due at or before now, `Pending` when
    /// strictly in the future) and a fresh id before being stored.
    ///
    /// One id is minted per call either way, so a rejection payload
    /// carries an id that was never persisted.
    #[instrument(skip(self, item), fields(todo_text = %item.text))]
    pub async fn create(&self, item: Todo) -> TodoResult<Todo> {
        let id = self.ids.next_id();

        match item.when {
            Some(when) if !item.text.is_empty() => {
                let status = if when <= self.clock.now() {
                    TodoStatus::Late
                } else {
                    TodoStatus::Pending
                };

                let record = Todo {
                    text: item.text,
                    when: Some(when),
                    status: Some(status),
                    id,
                };
                self.repository.create(record).await
            }
            _ => {
                tracing::debug!("Rejected todo with missing fields");
                Err(TodoError::InvalidData {
                    data: Todo { id, ..item },
                })
            }
        }
    }
}
