//! In-Memory TodoList Repository Implementation

use std::time::Duration;

use async_trait::async_trait;
use parking_lot::{RwLock, RwLockWriteGuard};
use tracing::debug;

use todo_domain::{
    errors::DomainResult,
    repositories::{TodoListReader, TodoListWriter},
    todo_item::{Progression, TodoItem},
    value_objects::{CategoryRegistry, TodoItemId},
};

use crate::error::PersistenceError;

/// Upper bound on waiting for the write lock
const LOCK_TIMEOUT: Duration = Duration::from_secs(5);

/// Stored row for one todo item
#[derive(Debug, Clone)]
struct TodoItemRecord {
    id: TodoItemId,
    title: String,
    description: String,
    category: String,
    progressions: Vec<Progression>,
}

impl From<&TodoItem> for TodoItemRecord {
    fn from(item: &TodoItem) -> Self {
        Self {
            id: item.id(),
            title: item.title().to_string(),
            description: item.description().to_string(),
            category: item.category().to_string(),
            progressions: item.progressions().to_vec(),
        }
    }
}

impl TodoItemRecord {
    fn to_item(&self) -> TodoItem {
        TodoItem::reconstitute(
            self.id,
            self.title.clone(),
            self.description.clone(),
            self.category.clone(),
            self.progressions.clone(),
        )
    }
}

#[derive(Debug, Default)]
struct State {
    /// Records in insertion order
    items: Vec<TodoItemRecord>,
    /// Highest id ever handed out or stored
    last_id: i64,
}

/// Thread-safe in-memory implementation of TodoListRepository
///
/// Uses RwLock for concurrent read access with exclusive write access.
/// Stores detached records and rebuilds items on read. `next_id` and
/// every write go through the same lock, so ids are never handed out twice.
#[derive(Debug)]
pub struct InMemoryTodoListRepository {
    state: RwLock<State>,
    categories: CategoryRegistry,
    lock_timeout: Duration,
}

impl InMemoryTodoListRepository {
    /// Create a new empty repository with the given category registry
    pub fn new(categories: CategoryRegistry) -> Self {
        Self {
            state: RwLock::new(State::default()),
            categories,
            lock_timeout: LOCK_TIMEOUT,
        }
    }

    /// Create with initial items (useful for testing)
    pub fn with_items(categories: CategoryRegistry, items: Vec<TodoItem>) -> Self {
        let last_id = items.iter().map(|i| i.id().value()).max().unwrap_or(0);
        let items = items.iter().map(TodoItemRecord::from).collect();
        Self {
            state: RwLock::new(State { items, last_id }),
            categories,
            lock_timeout: LOCK_TIMEOUT,
        }
    }

    /// Get the current count of items (for testing)
    pub fn count(&self) -> usize {
        self.state.read().items.len()
    }

    /// Clear all items (for testing)
    ///
    /// The id high-water mark is kept, so cleared ids are not reused.
    pub fn clear(&self) -> Result<(), PersistenceError> {
        self.write_state()?.items.clear();
        Ok(())
    }

    fn write_state(&self) -> Result<RwLockWriteGuard<'_, State>, PersistenceError> {
        self.state.try_write_for(self.lock_timeout).ok_or_else(|| {
            PersistenceError::LockError(format!(
                "write lock not acquired within {:?}",
                self.lock_timeout
            ))
        })
    }
}

impl Default for InMemoryTodoListRepository {
    fn default() -> Self {
        Self::new(CategoryRegistry::default())
    }
}

/// Implementation of TodoListReader for read operations
#[async_trait]
impl TodoListReader for InMemoryTodoListRepository {
    async fn find_by_id(&self, id: &TodoItemId) -> DomainResult<Option<TodoItem>> {
        let state = self.state.read();
        Ok(state
            .items
            .iter()
            .find(|r| r.id == *id)
            .map(TodoItemRecord::to_item))
    }

    async fn find_all(&self) -> DomainResult<Vec<TodoItem>> {
        let state = self.state.read();
        Ok(state.items.iter().map(TodoItemRecord::to_item).collect())
    }

    async fn all_categories(&self) -> DomainResult<Vec<String>> {
        Ok(self.categories.names().to_vec())
    }

    async fn category_exists(&self, category: &str) -> DomainResult<bool> {
        Ok(self.categories.contains(category))
    }
}

/// Implementation of TodoListWriter for write operations
#[async_trait]
impl TodoListWriter for InMemoryTodoListRepository {
    async fn add(&self, item: &TodoItem) -> DomainResult<()> {
        let mut state = self.write_state()?;

        if state.items.iter().any(|r| r.id == item.id()) {
            return Err(PersistenceError::database(format!(
                "TodoItem with id {} already exists",
                item.id()
            ))
            .into());
        }

        state.last_id = state.last_id.max(item.id().value());
        state.items.push(TodoItemRecord::from(item));
        debug!(id = %item.id(), "Stored TodoItem");
        Ok(())
    }

    async fn update(&self, item: &TodoItem) -> DomainResult<()> {
        let mut state = self.write_state()?;
        if let Some(slot) = state.items.iter_mut().find(|r| r.id == item.id()) {
            *slot = TodoItemRecord::from(item);
        }
        Ok(())
    }

    async fn delete(&self, id: &TodoItemId) -> DomainResult<()> {
        let mut state = self.write_state()?;
        state.items.retain(|r| r.id != *id);
        Ok(())
    }

    async fn next_id(&self) -> DomainResult<TodoItemId> {
        let mut state = self.write_state()?;
        state.last_id += 1;
        Ok(TodoItemId::new(state.last_id))
    }
}

// TodoListRepository is automatically implemented via blanket impl in domain
